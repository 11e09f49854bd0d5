//! Client composition with a scripted frontend over the bundled content.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use client_bootstrap::{ClientConfig, RuntimeBuilder};
use game_core::{InputState, LevelPhase};
use maze_client::{Client, Frontend};
use runtime::Runtime;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// Stands still in the first level for a while, then reports its phase.
struct Idle {
    outcome: Arc<Mutex<Option<LevelPhase>>>,
}

#[async_trait]
impl Frontend for Idle {
    async fn run(&mut self, runtime: Runtime) -> Result<()> {
        let mut session = runtime.start_level(0)?;
        for _ in 0..120 {
            session.step(InputState::empty())?;
        }
        *self.outcome.lock().unwrap() = Some(session.phase());
        Ok(())
    }
}

#[tokio::test]
async fn frontend_receives_the_runtime() {
    let config = ClientConfig {
        data_dir: data_dir(),
        ..ClientConfig::default()
    };
    let setup = RuntimeBuilder::new().config(config).build().unwrap();
    let outcome = Arc::new(Mutex::new(None));

    Client::builder()
        .runtime(setup.runtime)
        .frontend(Idle {
            outcome: Arc::clone(&outcome),
        })
        .build()
        .unwrap()
        .run()
        .await
        .unwrap();

    // The training souleater starts far outside its notice radius.
    assert_eq!(*outcome.lock().unwrap(), Some(LevelPhase::Running));
}

#[test]
fn builder_requires_both_layers() {
    let err = Client::builder().build().err().unwrap();
    assert!(err.to_string().contains("Runtime is required"));
}
