use crate::{AnalysisRequest, RequestId};

/// Side effects requested by `update`; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one analysis request to the service and report back with the same id.
    Analyze {
        request_id: RequestId,
        request: AnalysisRequest,
    },
}
