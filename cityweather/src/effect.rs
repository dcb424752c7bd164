//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current conditions for `city`, tagged with the request generation
    FetchWeather { request_id: u64, city: String },
    /// Clear the error banner with this id once its display window passes
    ExpireError { id: u64 },
    /// End the empty-submission shake with this id
    EndShake { id: u64 },
}
