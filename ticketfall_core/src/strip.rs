use std::time::Duration;

use serde::Serialize;
use ticketfall_shared::REEL_COUNT;
use tracing::warn;

use crate::config::AnimatorConfig;
use crate::easing::Motion;
use crate::rng::StripRng;
use crate::symbols::{SymbolMatch, Ticket, CATALOG};

/// Tickets of one reel, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Strip {
    pub tickets: Vec<Ticket>,
    pub winner_index: Option<usize>,
}

impl Strip {
    /// Random idle strip with no winner.
    pub fn idle(config: &AnimatorConfig, rng: &mut StripRng) -> Self {
        let tickets = (0..config.idle_len)
            .map(|_| Ticket::filler(rng.pick(&CATALOG)))
            .collect();
        Self {
            tickets,
            winner_index: None,
        }
    }

    /// Spin strip: top buffer, the winner at `focus_index`, then the filler the reel falls through.
    pub fn spin(
        config: &AnimatorConfig,
        reel: usize,
        target: SymbolMatch,
        rng: &mut StripRng,
    ) -> Self {
        let mut tickets = Vec::with_capacity(config.strip_len(reel));
        tickets.extend((0..config.focus_index).map(|_| Ticket::filler(rng.pick(&CATALOG))));
        tickets.push(Ticket::winner(target.into_symbol()));
        tickets.extend((0..config.filler_len(reel)).map(|_| Ticket::filler(rng.pick(&CATALOG))));
        Self {
            tickets,
            winner_index: Some(config.focus_index),
        }
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ticket> {
        self.tickets.get(index)
    }

    pub fn winner(&self) -> Option<&Ticket> {
        self.winner_index.and_then(|i| self.tickets.get(i))
    }
}

/// Everything one reel does during a spin, computed before anything moves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReelPlan {
    pub reel: usize,
    pub target: f64,
    pub fallback: bool,
    pub strip: Strip,
    pub start_offset: f64,
    pub target_offset: f64,
    pub start_delay_ms: u64,
    pub motion: Motion,
}

impl ReelPlan {
    pub fn build(config: &AnimatorConfig, reel: usize, target: f64, rng: &mut StripRng) -> Self {
        let lookup = SymbolMatch::lookup(target);
        let fallback = lookup.is_fallback();
        if fallback {
            warn!(reel, value = target, "value not in catalog, rendering raw number");
        }
        Self {
            reel,
            target,
            fallback,
            strip: Strip::spin(config, reel, lookup, rng),
            start_offset: config.offset_for(config.start_index(reel)),
            target_offset: config.offset_for(config.focus_index),
            start_delay_ms: config.start_delay(reel).as_millis() as u64,
            motion: config.motion(reel),
        }
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    /// The offset grows toward the target, so the strip moves down and tickets fall.
    pub fn falls_down(&self) -> bool {
        self.start_offset < self.target_offset
    }
}

/// Plans for all reels of spin `nonce`.
pub fn plan_spin(
    config: &AnimatorConfig,
    seed: &str,
    nonce: u64,
    reels: &[f64; REEL_COUNT],
) -> Vec<ReelPlan> {
    reels
        .iter()
        .enumerate()
        .map(|(reel, &target)| {
            let mut rng = StripRng::for_spin(seed, nonce, reel);
            ReelPlan::build(config, reel, target, &mut rng)
        })
        .collect()
}
