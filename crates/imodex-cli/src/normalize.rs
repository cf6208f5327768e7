//! The `normalize` subcommand: thin assembly around the resolver and the
//! feature extractor.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use serde::Serialize;

use imodex_core::{AppConfig, NormalizedProperty, ParsedListing, ResolvedLocation};
use imodex_extract::PropertyFeatureExtractor;
use imodex_geo::{
    CachedGeocoder, Gazetteer, LocationResolver, NominatimClient, ParseStrategy,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Two-part heuristic: parish candidate, then municipality candidate.
    TwoPart,
    /// Positional heuristic: parish first, district last.
    Positional,
}

impl From<StrategyArg> for ParseStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::TwoPart => ParseStrategy::TwoPart,
            StrategyArg::Positional => ParseStrategy::Positional,
        }
    }
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input file with one parsed-listing object or an array of them;
    /// reads stdin when omitted.
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = StrategyArg::Positional)]
    strategy: StrategyArg,

    /// Skip the external geocoding fallback.
    #[arg(long)]
    no_geocode: bool,
}

/// The final canonical listing record. Coordinates are serialized as
/// decimal strings, matching what downstream consumers store.
#[derive(Debug, Serialize)]
struct CanonicalRecord {
    title: String,
    district: Option<String>,
    municipality: Option<String>,
    parish: Option<String>,
    lat: Option<String>,
    lng: Option<String>,
    #[serde(flatten)]
    property: NormalizedProperty,
    normalized_at: chrono::DateTime<chrono::Utc>,
}

impl CanonicalRecord {
    fn assemble(
        title: String,
        location: ResolvedLocation,
        property: NormalizedProperty,
    ) -> Self {
        let (lat, lng) = match location.coordinates {
            Some(coordinates) => (
                Some(coordinates.lat.to_string()),
                Some(coordinates.lng.to_string()),
            ),
            None => (None, None),
        };
        Self {
            title,
            district: location.district,
            municipality: location.municipality,
            parish: location.parish,
            lat,
            lng,
            property,
            normalized_at: chrono::Utc::now(),
        }
    }
}

pub async fn run(config: &AppConfig, args: NormalizeArgs) -> anyhow::Result<()> {
    let listings = read_listings(args.input.as_deref())?;
    tracing::info!(count = listings.len(), "normalizing listings");

    let client = NominatimClient::new(config).context("building geocoding client")?;
    let geocoder = CachedGeocoder::new(client, config.geocode_cache_capacity);
    let resolver = LocationResolver::new(Gazetteer::builtin(), geocoder);
    let extractor = PropertyFeatureExtractor::new();
    let strategy = ParseStrategy::from(args.strategy);

    let mut stdout = std::io::stdout().lock();
    for listing in listings {
        let location = match &listing.location {
            Some(input) => resolver.resolve(input, strategy, !args.no_geocode).await,
            None => ResolvedLocation::default(),
        };
        let property = extractor.extract(&listing.features, &listing.title, &listing.description);
        let record = CanonicalRecord::assemble(listing.title, location, property);
        serde_json::to_writer(&mut stdout, &record)?;
        writeln!(stdout)?;
    }

    Ok(())
}

fn read_listings(input: Option<&std::path::Path>) -> anyhow::Result<Vec<ParsedListing>> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    let value: serde_json::Value = serde_json::from_str(&text).context("parsing input JSON")?;
    let listings = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<ParsedListing>, _>>()
            .context("parsing listing array")?,
        object => vec![serde_json::from_value(object).context("parsing listing object")?],
    };
    Ok(listings)
}
