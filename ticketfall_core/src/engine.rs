use std::cell::Cell;

use futures::future::try_join_all;
use ticketfall_shared::{SpinResult, REEL_COUNT};
use tracing::{debug, error, info};

use crate::{
    config::AnimatorConfig,
    error::SpinError,
    rng::StripRng,
    strip::{plan_spin, ReelPlan, Strip},
    surface::{Clock, HostBridge, ReelSurface, SpinSource, SpinView},
    symbols::Ticket,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning,
}

/// The host-side pieces a spin draws on.
pub struct Stage<R, V, H> {
    pub reels: [R; REEL_COUNT],
    pub view: V,
    pub host: H,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinReport {
    pub result: SpinResult,
    pub nonce: u64,
    pub settled: Vec<Ticket>, // winner of each reel, in reel order
    pub message: String,
}

pub struct ReelAnimator<S, C> {
    config: AnimatorConfig,
    source: S,
    clock: C,
    seed: String,
    state: Cell<SpinState>,
    nonce: Cell<u64>,
}

impl<S: SpinSource, C: Clock> ReelAnimator<S, C> {
    pub fn new(config: AnimatorConfig, source: S, clock: C, seed: impl Into<String>) -> Self {
        Self {
            config,
            source,
            clock,
            seed: seed.into(),
            state: Cell::new(SpinState::Idle),
            nonce: Cell::new(0),
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn state(&self) -> SpinState {
        self.state.get()
    }

    pub fn nonce(&self) -> u64 {
        self.nonce.get()
    }

    fn enter<V: SpinView>(&self, state: SpinState, view: &V) {
        self.state.set(state);
        view.set_trigger_enabled(state == SpinState::Idle);
    }

    /// Fill every reel with a random idle strip centered on the focus index.
    pub fn init_tracks<R, V, H>(&self, stage: &Stage<R, V, H>) -> Result<(), SpinError>
    where
        R: ReelSurface,
        V: SpinView,
    {
        for (reel, surface) in stage.reels.iter().enumerate() {
            let strip = Strip::idle(&self.config, &mut StripRng::for_idle(&self.seed, reel));
            surface
                .replace(&strip)
                .and_then(|_| surface.jump_to(self.config.idle_offset()))
                .map_err(|source| SpinError::Surface { reel, source })?;
        }
        self.enter(SpinState::Idle, &stage.view);
        Ok(())
    }

    /// Run one spin. Returns `SpinError::Busy` untouched if another spin is in flight.
    pub async fn spin<R, V, H>(&self, stage: &Stage<R, V, H>) -> Result<SpinReport, SpinError>
    where
        R: ReelSurface,
        V: SpinView,
        H: HostBridge,
    {
        if self.state.get() == SpinState::Spinning {
            debug!("spin ignored, reels still moving");
            return Err(SpinError::Busy);
        }
        self.enter(SpinState::Spinning, &stage.view);
        stage.view.show_message(&self.config.messages.spinning);

        match self.run(&stage.reels).await {
            Ok(report) => {
                stage.view.show_message(&report.message);
                self.enter(SpinState::Idle, &stage.view);
                stage.host.notify_success();
                info!(nonce = report.nonce, total = %report.result.total_label, "spin complete");
                Ok(report)
            }
            Err(e) => {
                error!(error = %e, "spin failed");
                stage.view.show_message(&self.config.messages.network_error);
                self.enter(SpinState::Idle, &stage.view);
                Err(e)
            }
        }
    }

    async fn run<R: ReelSurface>(&self, reels: &[R; REEL_COUNT]) -> Result<SpinReport, SpinError> {
        let result = self.source.fetch().await?;
        let nonce = self.nonce.get() + 1;
        self.nonce.set(nonce);

        let plans = plan_spin(&self.config, &self.seed, nonce, &result.reels);
        try_join_all(
            reels
                .iter()
                .zip(&plans)
                .map(|(surface, plan)| self.run_reel(surface, plan)),
        )
        .await?;

        Ok(SpinReport {
            message: self.config.messages.result_text(&result.total_label),
            settled: plans.iter().filter_map(|p| p.strip.winner().cloned()).collect(),
            nonce,
            result,
        })
    }

    async fn run_reel<R: ReelSurface>(&self, surface: &R, plan: &ReelPlan) -> Result<(), SpinError> {
        let reel = plan.reel;
        let fail = |source| SpinError::Surface { reel, source };

        self.clock.sleep(plan.start_delay()).await;
        surface.replace(&plan.strip).map_err(fail)?;
        surface.jump_to(plan.start_offset).map_err(fail)?;
        surface.flush_layout();
        surface
            .fall_to(plan.target_offset, &plan.motion)
            .await
            .map_err(fail)?;
        debug!(reel, value = plan.target, "reel settled");
        Ok(())
    }
}
