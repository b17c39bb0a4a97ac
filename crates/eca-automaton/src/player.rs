//! Async driver that runs a controller on a single tokio task.
//!
//! The task owns the controller outright. Commands from a [`PlayerHandle`]
//! and fired ticks from the [`TokioTimer`] are handled one at a time in the
//! same loop, so a pause or reset always lands between two ticks and never
//! in the middle of one.

use eca_core::SimulationParams;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::PlaybackConfig;
use crate::controller::{AnimationController, TickOutcome};
use crate::error::{AutomatonError, AutomatonResult};
use crate::render::Renderer;
use crate::state::AnimationState;
use crate::timer::{TickTicket, TokioTimer};

/// Snapshot of a running player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStatus {
    pub animation: AnimationState,
    pub step: usize,
    pub steps: usize,
    pub rule: u8,
    pub width: usize,
}

enum PlayerCommand {
    Toggle(oneshot::Sender<AnimationState>),
    Reset {
        rule: i64,
        width: i64,
        steps: i64,
        reply: oneshot::Sender<AutomatonResult<()>>,
    },
    Status(oneshot::Sender<PlayerStatus>),
}

/// Cloneable control surface for a [`Player`].
#[derive(Clone)]
pub struct PlayerHandle {
    commands: mpsc::UnboundedSender<PlayerCommand>,
    cancel: CancellationToken,
}

impl PlayerHandle {
    /// Play if stopped, pause if playing. Returns the resulting state.
    pub async fn toggle(&self) -> AutomatonResult<AnimationState> {
        self.request(PlayerCommand::Toggle).await
    }

    /// Restart with new parameters; invalid ones leave the player as it was.
    pub async fn reset(&self, rule: i64, width: i64, steps: i64) -> AutomatonResult<()> {
        self.request(|reply| PlayerCommand::Reset {
            rule,
            width,
            steps,
            reply,
        })
        .await?
    }

    pub async fn status(&self) -> AutomatonResult<PlayerStatus> {
        self.request(PlayerCommand::Status).await
    }

    /// Stop the player task. Its pending tick is dropped with it.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> PlayerCommand,
    ) -> AutomatonResult<T> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(command(tx))
            .map_err(|_| AutomatonError::PlayerClosed)?;
        rx.await.map_err(|_| AutomatonError::PlayerClosed)
    }
}

/// A controller bound to a tokio timer, waiting to be run.
pub struct Player<R> {
    controller: AnimationController<R, TokioTimer>,
    commands: mpsc::UnboundedReceiver<PlayerCommand>,
    ticks: mpsc::UnboundedReceiver<TickTicket>,
    cancel: CancellationToken,
    exit_on_complete: bool,
    autoplay: bool,
}

impl<R: Renderer> Player<R> {
    pub fn new(
        params: SimulationParams,
        config: PlaybackConfig,
        renderer: R,
    ) -> (Self, PlayerHandle) {
        let (timer, ticks) = TokioTimer::new();
        let (tx, commands) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let player = Self {
            controller: AnimationController::new(params, config, renderer, timer),
            commands,
            ticks,
            cancel: cancel.clone(),
            exit_on_complete: false,
            autoplay: false,
        };
        (
            player,
            PlayerHandle {
                commands: tx,
                cancel,
            },
        )
    }

    /// Return from [`run`](Self::run) as soon as playback completes.
    pub fn exit_on_complete(mut self, exit: bool) -> Self {
        self.exit_on_complete = exit;
        self
    }

    /// Start playing as soon as [`run`](Self::run) begins.
    pub fn autoplay(mut self) -> Self {
        self.autoplay = true;
        self
    }

    /// Process commands and ticks until shut down, until every handle is
    /// dropped, or (if asked) until playback completes. Hands the controller
    /// back for inspection.
    pub async fn run(mut self) -> AnimationController<R, TokioTimer> {
        debug!("player_started");
        if self.autoplay {
            self.controller.play();
        }
        loop {
            tokio::select! {
                biased;

                _ = self.cancel.cancelled() => break,

                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },

                Some(ticket) = self.ticks.recv() => {
                    let outcome = self.controller.on_tick(ticket);
                    if outcome == TickOutcome::Completed && self.exit_on_complete {
                        break;
                    }
                }
            }
        }
        self.controller.pause();
        info!(
            step = self.controller.state().current_step(),
            state = %self.controller.animation(),
            "player_stopped"
        );
        self.controller
    }

    fn handle(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Toggle(reply) => {
                let _ = reply.send(self.controller.toggle());
            }
            PlayerCommand::Reset {
                rule,
                width,
                steps,
                reply,
            } => {
                let _ = reply.send(self.controller.reset(rule, width, steps));
            }
            PlayerCommand::Status(reply) => {
                let state = self.controller.state();
                let _ = reply.send(PlayerStatus {
                    animation: self.controller.animation(),
                    step: state.current_step(),
                    steps: state.steps(),
                    rule: state.rule().value(),
                    width: state.width(),
                });
            }
        }
    }
}
