//! Gisgraphy CLI
//!
//! Command-line front end for the Gisgraphy web services.

#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use gisgraphy::{
    AutocompleteRequest, FindStreetRequest, GeocodeRequest, GeolocalizationRequest,
    GisgraphyClient, GisgraphyConfig, GisgraphyService, ParseAddressRequest,
    ReverseGeocodeRequest, ServiceResult, Style,
};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for a call that returned a degraded result
const DEGRADED_EXIT_CODE: i32 = 2;

/// Gisgraphy CLI
#[derive(Parser)]
#[command(name = "gisgraphy-cli")]
#[command(author, version, about = "Gisgraphy geocoding web service client", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Gisgraphy server URL
    #[arg(long, env = "GISGRAPHY_SERVER_URL", default_value = "https://services.gisgraphy.com")]
    server_url: String,

    /// API key sent with every request
    #[arg(long, env = "GISGRAPHY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Geocode a free-form address
    ///
    /// Example: gisgraphy-cli geocode "Airport Terminal Road, 12205 Colonie" --country US
    Geocode {
        /// Address to geocode
        address: String,

        /// ISO 3166 alpha-2 country hint
        #[arg(short, long)]
        country: Option<String>,

        /// Whether the address is a well-formed postal address (true or false)
        #[arg(long)]
        postal: Option<bool>,
    },

    /// Find the address closest to a coordinate
    Reverse {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Find streets around a coordinate
    Street {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Search radius in meters
        #[arg(short, long, default_value_t = FindStreetRequest::DEFAULT_RADIUS, allow_negative_numbers = true)]
        radius: f64,

        /// Only return one-way streets
        #[arg(long)]
        one_way: bool,

        /// Include the distance to each street
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        distance: bool,

        /// Street type filter (e.g. MOTORWAY, RESIDENTIAL)
        #[arg(long)]
        street_type: Option<String>,
    },

    /// Find places and features around a coordinate
    Geoloc {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Search radius in meters
        #[arg(short, long, default_value_t = GeolocalizationRequest::DEFAULT_RADIUS, allow_negative_numbers = true)]
        radius: f64,

        /// Include the distance to each feature
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        distance: bool,

        /// Place type filter (e.g. City, Airport)
        #[arg(long)]
        place_type: Option<String>,
    },

    /// Full-text search with autocompletion
    Autocomplete {
        /// Text to complete
        text: String,

        /// Require every word to match
        #[arg(long)]
        all_words: bool,

        /// Spellchecking mode passed through to the server
        #[arg(long)]
        spellchecking: Option<String>,

        /// Return suggestions rather than full-text matches
        #[arg(long)]
        suggest: bool,

        /// Bias results around this latitude (requires --lng)
        #[arg(long, allow_negative_numbers = true, requires = "lng")]
        lat: Option<f64>,

        /// Bias results around this longitude (requires --lat)
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lng: Option<f64>,

        /// Search radius in meters around the location
        #[arg(short, long, default_value_t = AutocompleteRequest::DEFAULT_RADIUS, allow_negative_numbers = true)]
        radius: f64,

        /// Output style: short, medium, long or full
        #[arg(long, default_value = "medium")]
        style: Style,

        /// ISO 3166 alpha-2 country filter
        #[arg(short, long)]
        country: Option<String>,

        /// ISO 639 language for localized names
        #[arg(long)]
        lang: Option<String>,
    },

    /// Split an address into its components
    Parse {
        /// Address to parse
        address: String,

        /// ISO 3166 alpha-2 country hint
        #[arg(short, long)]
        country: Option<String>,
    },
}

/// Rendered answer of one command
#[derive(Debug)]
struct Outcome {
    json: String,
    degraded: bool,
}

impl Outcome {
    fn from_result<T: ServiceResult + Serialize>(result: &T) -> anyhow::Result<Self> {
        if result.is_degraded() {
            warn!(
                failure = ?result.failure(),
                detail = result.message().unwrap_or_default(),
                "Gisgraphy returned a degraded result"
            );
        }
        Ok(Self {
            json: serde_json::to_string_pretty(result)?,
            degraded: result.is_degraded(),
        })
    }
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Dispatch one command to the service
async fn run(service: &dyn GisgraphyService, command: Commands) -> anyhow::Result<Outcome> {
    match command {
        Commands::Geocode {
            address,
            country,
            postal,
        } => {
            let request = GeocodeRequest {
                address,
                country,
                postal,
            };
            Outcome::from_result(&service.geocode(&request).await?)
        },

        Commands::Reverse { lat, lng } => {
            let request = ReverseGeocodeRequest::new(lat, lng);
            Outcome::from_result(&service.reverse_geocode(&request).await?)
        },

        Commands::Street {
            lat,
            lng,
            radius,
            one_way,
            distance,
            street_type,
        } => {
            let request = FindStreetRequest {
                radius,
                one_way,
                distance,
                street_type,
                ..FindStreetRequest::new(lat, lng)
            };
            Outcome::from_result(&service.find_street(&request).await?)
        },

        Commands::Geoloc {
            lat,
            lng,
            radius,
            distance,
            place_type,
        } => {
            let request = GeolocalizationRequest {
                radius,
                distance,
                place_type,
                ..GeolocalizationRequest::new(lat, lng)
            };
            Outcome::from_result(&service.geolocalization(&request).await?)
        },

        Commands::Autocomplete {
            text,
            all_words,
            spellchecking,
            suggest,
            lat,
            lng,
            radius,
            style,
            country,
            lang,
        } => {
            let request = AutocompleteRequest {
                all_words_required: all_words,
                spellchecking,
                suggest,
                latitude: lat,
                longitude: lng,
                radius,
                style,
                country,
                lang,
                ..AutocompleteRequest::new(text)
            };
            Outcome::from_result(&service.autocomplete(&request).await?)
        },

        Commands::Parse { address, country } => {
            let request = ParseAddressRequest { address, country };
            Outcome::from_result(&service.parse_address(&request).await?)
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GisgraphyConfig {
        timeout_secs: cli.timeout,
        ..GisgraphyConfig::new(cli.server_url, cli.api_key)
    };
    let client = GisgraphyClient::new(config)?;

    let outcome = run(&client, cli.command).await?;
    println!("{}", outcome.json);

    if outcome.degraded {
        std::process::exit(DEGRADED_EXIT_CODE);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gisgraphy::{
        AddressResult, AutocompleteResult, Failure, GeolocalizationFeatureResult, GisgraphyError,
        StreetDistanceResult,
    };
    use mockall::mock;

    mock! {
        pub Gisgraphy {}

        #[async_trait::async_trait]
        impl GisgraphyService for Gisgraphy {
            async fn geocode(&self, request: &GeocodeRequest) -> Result<AddressResult, GisgraphyError>;
            async fn reverse_geocode(&self, request: &ReverseGeocodeRequest) -> Result<AddressResult, GisgraphyError>;
            async fn find_street(&self, request: &FindStreetRequest) -> Result<StreetDistanceResult, GisgraphyError>;
            async fn geolocalization(&self, request: &GeolocalizationRequest) -> Result<GeolocalizationFeatureResult, GisgraphyError>;
            async fn autocomplete(&self, request: &AutocompleteRequest) -> Result<AutocompleteResult, GisgraphyError>;
            async fn parse_address(&self, request: &ParseAddressRequest) -> Result<AddressResult, GisgraphyError>;
        }
    }

    fn colonie() -> AddressResult {
        serde_json::from_value(serde_json::json!({
            "numFound": 1,
            "QTime": 13,
            "result": [{ "id": 167_344_877, "city": "Colonie", "countrycode": "US" }]
        }))
        .unwrap()
    }

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn cli_parses_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "gisgraphy-cli",
            "street",
            "--lat",
            "42.745",
            "--lng",
            "-73.809",
            "--one-way",
        ])
        .unwrap();

        match cli.command {
            Commands::Street {
                lat,
                lng,
                radius,
                one_way,
                ..
            } => {
                assert!((lat - 42.745).abs() < f64::EPSILON);
                assert!((lng + 73.809).abs() < f64::EPSILON);
                assert!((radius - FindStreetRequest::DEFAULT_RADIUS).abs() < f64::EPSILON);
                assert!(one_way);
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_distance_defaults_to_true_and_can_be_disabled() {
        let cli = Cli::try_parse_from(["gisgraphy-cli", "geoloc", "--lat", "42.7", "--lng", "-73.8"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Geoloc { distance: true, .. }));

        let cli = Cli::try_parse_from([
            "gisgraphy-cli",
            "street",
            "--lat",
            "42.7",
            "--lng",
            "-73.8",
            "--distance",
            "false",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Street { distance: false, .. }));
    }

    #[test]
    fn cli_parses_autocomplete_flags() {
        let cli = Cli::try_parse_from([
            "gisgraphy-cli",
            "autocomplete",
            "Albny",
            "--spellchecking",
            "true",
            "--suggest",
        ])
        .unwrap();
        match cli.command {
            Commands::Autocomplete {
                spellchecking,
                suggest,
                ..
            } => {
                assert_eq!(spellchecking.as_deref(), Some("true"));
                assert!(suggest);
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_postal_as_bool() {
        let cli = Cli::try_parse_from(["gisgraphy-cli", "geocode", "1 Main St", "--postal", "true"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Geocode { postal: Some(true), .. }));
        assert!(
            Cli::try_parse_from(["gisgraphy-cli", "geocode", "1 Main St", "--postal", "12205"])
                .is_err()
        );
    }

    #[test]
    fn cli_rejects_half_location() {
        let result = Cli::try_parse_from(["gisgraphy-cli", "autocomplete", "Albany", "--lat", "42.6"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_style_case_insensitively() {
        let cli = Cli::try_parse_from(["gisgraphy-cli", "autocomplete", "Albany", "--style", "FULL"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Autocomplete {
                style: Style::Full,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn run_geocode_forwards_arguments() {
        let mut mock = MockGisgraphy::new();
        mock.expect_geocode()
            .withf(|request| {
                request.address == "Airport Terminal Road, 12205 Colonie"
                    && request.country.as_deref() == Some("US")
                    && request.postal == Some(true)
            })
            .times(1)
            .returning(|_| Ok(colonie()));

        let outcome = run(
            &mock,
            Commands::Geocode {
                address: "Airport Terminal Road, 12205 Colonie".to_string(),
                country: Some("US".to_string()),
                postal: Some(true),
            },
        )
        .await
        .unwrap();

        assert!(!outcome.degraded);
        assert!(outcome.json.contains("\"Colonie\""));
        assert!(outcome.json.contains("\"numFound\": 1"));
    }

    #[tokio::test]
    async fn run_street_forwards_options() {
        let mut mock = MockGisgraphy::new();
        mock.expect_find_street()
            .withf(|request| {
                request.one_way
                    && !request.distance
                    && (request.radius - 250.0).abs() < f64::EPSILON
                    && request.street_type.as_deref() == Some("RESIDENTIAL")
            })
            .times(1)
            .returning(|_| Ok(StreetDistanceResult::default()));

        let outcome = run(
            &mock,
            Commands::Street {
                lat: 42.745,
                lng: -73.809,
                radius: 250.0,
                one_way: true,
                distance: false,
                street_type: Some("RESIDENTIAL".to_string()),
            },
        )
        .await
        .unwrap();

        assert!(!outcome.degraded);
    }

    #[tokio::test]
    async fn run_autocomplete_builds_location() {
        let mut mock = MockGisgraphy::new();
        mock.expect_autocomplete()
            .withf(|request| {
                request.text == "Albany"
                    && request.latitude == Some(42.65)
                    && request.longitude == Some(-73.75)
                    && request.style == Style::Short
                    && request.all_words_required
                    && request.spellchecking.as_deref() == Some("true")
                    && request.suggest
            })
            .times(1)
            .returning(|_| Ok(AutocompleteResult::default()));

        let outcome = run(
            &mock,
            Commands::Autocomplete {
                text: "Albany".to_string(),
                all_words: true,
                spellchecking: Some("true".to_string()),
                suggest: true,
                lat: Some(42.65),
                lng: Some(-73.75),
                radius: AutocompleteRequest::DEFAULT_RADIUS,
                style: Style::Short,
                country: None,
                lang: None,
            },
        )
        .await
        .unwrap();

        assert!(!outcome.degraded);
    }

    #[tokio::test]
    async fn run_reports_degraded_result() {
        let mut mock = MockGisgraphy::new();
        mock.expect_parse_address().times(1).returning(|_| {
            Ok(AddressResult::degraded(
                Failure::HttpStatus { status: 500 },
                "Internal Server Error".to_string(),
            ))
        });

        let outcome = run(
            &mock,
            Commands::Parse {
                address: "1 Main St".to_string(),
                country: None,
            },
        )
        .await
        .unwrap();

        assert!(outcome.degraded);
        assert!(outcome.json.contains("Internal Server Error"));
    }

    #[tokio::test]
    async fn run_propagates_errors() {
        let mut mock = MockGisgraphy::new();
        mock.expect_reverse_geocode()
            .times(1)
            .returning(|_| Err(GisgraphyError::OutOfRange("latitude".to_string())));

        let result = run(&mock, Commands::Reverse { lat: 91.0, lng: 0.0 }).await;

        let error = result.unwrap_err();
        assert!(error.downcast_ref::<GisgraphyError>().is_some());
    }

    #[tokio::test]
    async fn run_geoloc_forwards_place_type() {
        let mut mock = MockGisgraphy::new();
        mock.expect_geolocalization()
            .withf(|request| request.place_type.as_deref() == Some("Airport") && !request.distance)
            .times(1)
            .returning(|_| Ok(GeolocalizationFeatureResult::default()));

        let outcome = run(
            &mock,
            Commands::Geoloc {
                lat: 42.745,
                lng: -73.809,
                radius: GeolocalizationRequest::DEFAULT_RADIUS,
                distance: false,
                place_type: Some("Airport".to_string()),
            },
        )
        .await
        .unwrap();

        assert!(!outcome.degraded);
    }
}
