//! End-to-end diagnosis workflow

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;
use common::models::DiagnosisRecord;
use common::{Error, Result};
use ledger::{DiagnosisStore, Ledger};
use tracing::{info, warn};
use uuid::Uuid;

use crate::classifier::Classifier;

/// Capability for fetching remedy and prevention guidance for a
/// disease label. Fallible and latency-bearing; no retries.
pub trait RemedyProvider: Send + Sync {
    fn remedy_tips(&self, disease: &str) -> impl Future<Output = Result<String>> + Send;
}

impl RemedyProvider for remedy::RemedyClient {
    async fn remedy_tips(&self, disease: &str) -> Result<String> {
        let resp = self
            .generate_remedy_tips(disease)
            .await
            .map_err(|e| Error::Provider(e.to_string()))?;
        Ok(resp.remedy_tips)
    }
}

/// Orchestrates one diagnosis: classify the image, fetch remedy text,
/// append the record, persist.
///
/// Only one diagnosis may be outstanding at a time; a second request
/// while one is in flight is rejected with [`Error::Busy`] rather than
/// queued.
pub struct DiagnosisWorkflow<C, R> {
    classifier: C,
    provider: R,
    provider_timeout: Duration,
    in_flight: AtomicBool,
}

impl<C: Classifier, R: RemedyProvider> DiagnosisWorkflow<C, R> {
    pub fn new(classifier: C, provider: R, provider_timeout: Duration) -> Self {
        Self {
            classifier,
            provider,
            provider_timeout,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run one diagnosis against `ledger` for the captured `image`.
    ///
    /// The image must already be a valid decodable reference; intake
    /// validation happens upstream. On any provider failure the ledger
    /// is left unchanged and the error surfaces to the caller once.
    pub async fn diagnose<S: DiagnosisStore>(
        &self,
        ledger: &Ledger<S>,
        image: String,
    ) -> Result<DiagnosisRecord> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::Busy);
        }

        let result = self.run(ledger, image).await;
        self.in_flight.store(false, Ordering::Release);
        result
    }

    async fn run<S: DiagnosisStore>(
        &self,
        ledger: &Ledger<S>,
        image: String,
    ) -> Result<DiagnosisRecord> {
        let classification = self.classifier.classify(&image)?;
        info!(
            "classified image as {} ({:.0}% confidence)",
            classification.disease,
            classification.confidence * 100.0
        );

        let remedy_call = self.provider.remedy_tips(&classification.disease);
        let remedy_tips = match tokio::time::timeout(self.provider_timeout, remedy_call).await {
            Ok(Ok(tips)) => tips,
            Ok(Err(e)) => {
                warn!("remedy provider failed: {e}");
                return Err(e);
            }
            Err(_) => {
                warn!(
                    "remedy provider timed out after {}s",
                    self.provider_timeout.as_secs()
                );
                return Err(Error::Provider("remedy provider timed out".to_string()));
            }
        };

        let record = DiagnosisRecord {
            id: format!("diag-{}", Uuid::new_v4()),
            image,
            disease: classification.disease,
            confidence: classification.confidence,
            remedy_tips,
            timestamp: Utc::now().timestamp_millis(),
        };

        ledger.append(record.clone()).await;
        info!("recorded diagnosis {}: {}", record.id, record.disease);

        Ok(record)
    }
}
