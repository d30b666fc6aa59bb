//! Job API endpoints.

use crate::Session;
use dynect_core::{Envelope, Method, ResourcePath, Result};

/// Job API endpoints
pub struct JobApi<'a> {
    session: &'a Session,
}

impl<'a> JobApi<'a> {
    pub(crate) const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Fetch a job.
    ///
    /// The envelope is returned as decoded, whatever its status, since the
    /// payload shape depends on the job.
    pub async fn get(&self, job_id: impl std::fmt::Display) -> Result<Envelope> {
        self.session
            .execute(&ResourcePath::job(&job_id.to_string()), Method::Get, None)
            .await
    }
}
