//! Full endpoint suite.
//!
//! Exercises every endpoint combination in a fixed order, pausing one
//! second between dependent control calls. The pacing is presentational,
//! mirroring how an operator would drive the real controller.

use clap::Args;
use tokio::time::{sleep, Duration};

use crate::api::{ApiReply, StabilityClient};
use crate::config::ClientConfig;
use crate::{output, Result};

#[derive(Debug, Clone, Args)]
pub struct SuiteArgs {}

const TOTAL_STEPS: usize = 14;
const PAUSE: Duration = Duration::from_secs(1);

struct SuiteRunner {
    step: usize,
    passed: usize,
    failed: usize,
}

impl SuiteRunner {
    fn new() -> Self {
        Self {
            step: 0,
            passed: 0,
            failed: 0,
        }
    }

    async fn run_step(
        &mut self,
        label: &str,
        call: impl std::future::Future<Output = Result<ApiReply>>,
    ) -> bool {
        self.step += 1;
        output::step(self.step, TOTAL_STEPS, label);

        let ok = match call.await {
            Ok(reply) => {
                output::reply(&reply);
                reply.is_success()
            }
            Err(err) => {
                output::error(&format!("request failed: {err}"));
                false
            }
        };

        if ok {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        ok
    }
}

pub async fn execute(_args: SuiteArgs) -> Result<()> {
    let config = ClientConfig::load()?;
    run(&config).await
}

/// Run the whole suite against the configured server.
pub async fn run(config: &ClientConfig) -> Result<()> {
    let client = StabilityClient::new(config)?;
    let mut runner = SuiteRunner::new();

    output::header("Full endpoint suite");

    // The status probe gates everything else; a dead server would just
    // produce thirteen more connection errors.
    if !runner.run_step("system status", client.system_status()).await {
        output::error("system status check failed, aborting the suite");
        return Ok(());
    }

    runner
        .run_step("callback peer health", client.callback_health())
        .await;

    runner
        .run_step("device state (all fields)", client.device_state(None))
        .await;
    runner
        .run_step(
            "device state (filtered)",
            client.device_state(Some(
                "operationMode,emergencyStop,cylinderState,platform1State,platform2State",
            )),
        )
        .await;

    runner
        .run_step("support rigid-support", client.support_control("rigid-support"))
        .await;
    sleep(PAUSE).await;
    runner
        .run_step("support flexible-reset", client.support_control("flexible-reset"))
        .await;

    for platform in [1u8, 2] {
        for state in ["raise", "reset"] {
            sleep(PAUSE).await;
            let label = format!("platform {platform} height {state}");
            runner
                .run_step(&label, client.platform_height_control(platform, state))
                .await;
        }
    }

    for platform in [1u8, 2] {
        for state in ["level", "level-reset"] {
            sleep(PAUSE).await;
            let label = format!("platform {platform} {state}");
            runner
                .run_step(&label, client.platform_horizontal_control(platform, state))
                .await;
        }
    }

    output::header("Suite summary");
    output::kv("passed", &runner.passed.to_string());
    output::kv("failed", &runner.failed.to_string());

    if runner.failed == 0 {
        output::success("all endpoints answered as expected");
    } else {
        output::warn("some endpoints did not answer as expected");
    }

    Ok(())
}
