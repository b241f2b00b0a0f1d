//! Test helpers for journey files and stubbed provider access.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use fleetfare_core::test_support::{StubFleetSource, brussels_offers, car};
use fleetfare_core::{FleetSource, FleetSourceError, Location, PricingOfferSet, Vehicle};
use tempfile::TempDir;

use crate::CliError;
use crate::source::{SourceBuilder, SourceSettings};

/// Temporary directory that is removed when dropped.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write test file");
        path
    }
}

/// The two-stop Brussels journey as the JSON accepted by `plan`.
pub(super) const TWO_STOP_JOURNEY: &str = r#"{
    "legs": [
        {
            "startLocation": { "lat": 50.8355, "lng": 4.3573 },
            "endLocation": { "lat": 50.8245, "lng": 4.3635 },
            "pauseMinutes": 120
        },
        {
            "startLocation": { "lat": 50.8245, "lng": 4.3635 },
            "endLocation": { "lat": 50.8275, "lng": 4.3745 }
        }
    ]
}"#;

/// Builds [`StubFleetSource`]s and records the settings it was given.
#[derive(Debug)]
pub(super) struct StubSourceBuilder {
    fleet: Vec<Vehicle>,
    offers: PricingOfferSet,
    fleet_error: Option<FleetSourceError>,
    pub(super) settings: std::cell::RefCell<Option<SourceSettings>>,
}

impl StubSourceBuilder {
    /// One Brussels car about 1.2 km from the South Station.
    pub(super) fn brussels() -> Self {
        Self {
            fleet: vec![car("v1", Location::new(50.8463, 4.3573))],
            offers: brussels_offers(),
            fleet_error: None,
            settings: std::cell::RefCell::new(None),
        }
    }

    pub(super) fn failing(err: FleetSourceError) -> Self {
        Self {
            fleet_error: Some(err),
            ..Self::brussels()
        }
    }
}

impl SourceBuilder for StubSourceBuilder {
    fn build(&self, settings: &SourceSettings) -> Result<Box<dyn FleetSource>, CliError> {
        self.settings.replace(Some(settings.clone()));
        let mut source = StubFleetSource::new(self.fleet.clone(), self.offers.clone());
        if let Some(err) = &self.fleet_error {
            source = source.with_fleet_error(err.clone());
        }
        Ok(Box::new(source))
    }
}
