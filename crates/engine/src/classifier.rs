//! Classifier capability

use common::models::{Classification, DISEASE_CATALOG};
use common::Result;
use rand::Rng;

/// Assigns a disease label and confidence to a captured image.
///
/// The ledger and analytics only see the output, so a real model can be
/// substituted here without touching them.
pub trait Classifier: Send + Sync {
    fn classify(&self, image: &str) -> Result<Classification>;
}

/// Stand-in classifier: a uniform pick from the disease catalog and a
/// confidence uniform in [0.75, 0.98). Never returns `Healthy`; only
/// the seed record carries that label.
#[derive(Debug, Default)]
pub struct RandomClassifier;

impl Classifier for RandomClassifier {
    fn classify(&self, _image: &str) -> Result<Classification> {
        let mut rng = rand::thread_rng();
        let disease = DISEASE_CATALOG[rng.gen_range(0..DISEASE_CATALOG.len())];
        let confidence = rng.gen_range(0.75..0.98);

        Ok(Classification {
            disease: disease.to_string(),
            confidence,
        })
    }
}
