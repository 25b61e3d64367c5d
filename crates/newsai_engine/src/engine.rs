use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use newsai_logging::{newsai_debug, TARGET_REQUESTS};

use crate::client::{AnalyzeSettings, Analyzer, ReqwestAnalyzer};
use crate::{AnalyzePayload, EngineEvent, RequestId};

enum EngineCommand {
    Analyze {
        request_id: RequestId,
        payload: AnalyzePayload,
    },
}

/// Owns the background worker that talks to the Analysis Service.
///
/// Dropping the handle closes the command channel; the worker then exits and
/// any completion still in flight is discarded.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: AnalyzeSettings) -> io::Result<Self> {
        Self::with_analyzer(Arc::new(ReqwestAnalyzer::new(settings)))
    }

    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("newsai-engine")
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let analyzer = analyzer.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(analyzer.as_ref(), command, event_tx).await;
                });
            }
            newsai_debug!(target: TARGET_REQUESTS, "engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn analyze(&self, request_id: RequestId, payload: AnalyzePayload) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze {
            request_id,
            payload,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    analyzer: &dyn Analyzer,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Analyze {
            request_id,
            payload,
        } => {
            let result = analyzer.analyze(&payload).await;
            // The receiver is gone once the UI has shut down.
            let _ = event_tx.send(EngineEvent::AnalysisCompleted { request_id, result });
        }
    }
}
