use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use log::{debug, error, trace, warn};
use crate::models::Vector2D;
use crate::motion::{CircularParticle, KinematicState};
use crate::simulation::{FrameScheduler, Tick, TickHandle, VirtualClock};
use crate::utils::{PhysicsError, SimulationConfig};

/// Callback invoked after every advance with the particle and the elapsed time.
pub type UpdateCallback = Box<dyn FnMut(&CircularParticle, f64) -> Result<(), Box<dyn Error>>>;

/// Returned by [`Simulator::on_update`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorStatus {
    /// No particle yet.
    Idle,
    Configured,
    Running,
    Paused,
}

/// Renderer flags. They never influence the kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_vectors: bool,
    pub show_trail: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { show_vectors: true, show_trail: true }
    }
}

struct Subscriber {
    id: CallbackId,
    callback: UpdateCallback,
}

/// Drives one [`CircularParticle`] from a host frame clock.
///
/// The simulator accumulates elapsed time from tick timestamps and notifies
/// subscribers after each advance. It never fails for a missing particle:
/// `start` logs a warning and does nothing, state queries return `None`.
///
/// # Example
///
/// ```
/// use rs_kinematics::motion::CircularParticle;
/// use rs_kinematics::simulation::{Simulator, VirtualClock};
///
/// let mut simulator = Simulator::new(VirtualClock::new());
/// simulator.set_particle(CircularParticle::uniform(2.0, 1.0).unwrap());
/// simulator.start();
///
/// simulator.run_frame(0.0); // the first frame only establishes the time base
/// simulator.run_frame(0.5);
///
/// assert!((simulator.elapsed_time() - 0.5).abs() < 1e-12);
/// let state = simulator.current_state().unwrap();
/// assert!((state.angle - 0.5).abs() < 1e-12);
/// ```
pub struct Simulator<S: FrameScheduler> {
    particle: Option<CircularParticle>,
    status: SimulatorStatus,
    elapsed: f64,
    last_timestamp: Option<f64>,
    pending_tick: Option<TickHandle>,
    subscribers: Vec<Subscriber>,
    next_callback_id: u64,
    display: DisplayOptions,
    trail: VecDeque<Vector2D>,
    trail_length: usize,
    scheduler: S,
}

impl<S: FrameScheduler> Simulator<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_config(scheduler, &SimulationConfig::default())
    }

    /// Uses `config.trail_length` for the trail buffer. The particle
    /// parameters in `config` are only used by [`Simulator::with_default_particle`].
    pub fn with_config(scheduler: S, config: &SimulationConfig) -> Self {
        Self {
            particle: None,
            status: SimulatorStatus::Idle,
            elapsed: 0.0,
            last_timestamp: None,
            pending_tick: None,
            subscribers: Vec::new(),
            next_callback_id: 0,
            display: DisplayOptions::default(),
            trail: VecDeque::with_capacity(config.trail_length),
            trail_length: config.trail_length,
            scheduler,
        }
    }

    /// Builds a simulator already configured with a particle made from `config`.
    pub fn with_default_particle(scheduler: S, config: &SimulationConfig) -> Result<Self, PhysicsError> {
        let mut simulator = Self::with_config(scheduler, config);
        simulator.set_particle(CircularParticle::from_config(config)?);
        Ok(simulator)
    }

    /// Replaces the particle. Elapsed time is kept, the trail is cleared.
    pub fn set_particle(&mut self, particle: CircularParticle) {
        self.particle = Some(particle);
        self.trail.clear();
        if self.status == SimulatorStatus::Idle {
            self.status = SimulatorStatus::Configured;
        }
    }

    pub fn particle(&self) -> Option<&CircularParticle> {
        self.particle.as_ref()
    }

    pub fn particle_mut(&mut self) -> Option<&mut CircularParticle> {
        self.particle.as_mut()
    }

    pub fn status(&self) -> SimulatorStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SimulatorStatus::Running
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed
    }

    pub fn start(&mut self) {
        match self.status {
            SimulatorStatus::Idle => warn!("Simulator::start called without a particle; ignoring"),
            SimulatorStatus::Running => {}
            SimulatorStatus::Configured | SimulatorStatus::Paused => {
                debug!("simulator started at t = {:.3}s", self.elapsed);
                self.status = SimulatorStatus::Running;
                self.last_timestamp = None;
                self.pending_tick = Some(self.scheduler.schedule_next_tick());
            }
        }
    }

    pub fn pause(&mut self) {
        self.cancel_pending_tick();
        if self.status == SimulatorStatus::Running {
            debug!("simulator paused at t = {:.3}s", self.elapsed);
            self.status = SimulatorStatus::Paused;
        }
    }

    /// Pauses and rewinds to t = 0. The particle and the subscribers are kept.
    pub fn reset(&mut self) {
        self.pause();
        self.elapsed = 0.0;
        self.last_timestamp = None;
        self.trail.clear();
        if self.status != SimulatorStatus::Idle {
            self.status = SimulatorStatus::Configured;
        }
        debug!("simulator reset");
    }

    /// Advances the simulation for a fired tick.
    ///
    /// Returns `false` when the tick is not the one currently pending (it was
    /// cancelled, or the simulator is not running), in which case nothing
    /// changes.
    pub fn on_tick(&mut self, tick: Tick) -> bool {
        if !self.is_running() || self.pending_tick != Some(tick.handle) {
            trace!("ignoring stale tick {:?}", tick.handle);
            return false;
        }
        self.pending_tick = None;

        let delta = match (self.last_timestamp, tick.timestamp.is_finite()) {
            (Some(previous), true) => (tick.timestamp - previous).max(0.0),
            _ => 0.0,
        };
        if tick.timestamp.is_finite() {
            self.last_timestamp = Some(tick.timestamp);
        }
        self.elapsed += delta;
        trace!("tick {:?}: dt = {:.4}s, t = {:.4}s", tick.handle, delta, self.elapsed);

        if let Some(particle) = &self.particle {
            if self.display.show_trail && self.trail_length > 0 {
                if self.trail.len() == self.trail_length {
                    self.trail.pop_front();
                }
                self.trail.push_back(particle.position(self.elapsed));
            }
            let elapsed = self.elapsed;
            for subscriber in &mut self.subscribers {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| (subscriber.callback)(particle, elapsed)));
                match outcome {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => error!("update callback {:?} failed: {}", subscriber.id, err),
                    Err(_) => error!("update callback {:?} panicked", subscriber.id),
                }
            }
        }

        self.pending_tick = Some(self.scheduler.schedule_next_tick());
        true
    }

    /// Forwards to [`CircularParticle::set_parameters`]. Without a particle this
    /// only logs a warning.
    pub fn set_parameters(
        &mut self,
        radius: f64,
        angular_velocity: f64,
        initial_angle: Option<f64>,
    ) -> Result<(), PhysicsError> {
        match self.particle.as_mut() {
            Some(particle) => particle.set_parameters(radius, angular_velocity, initial_angle),
            None => {
                warn!("Simulator::set_parameters called without a particle; ignoring");
                Ok(())
            }
        }
    }

    /// Forwards to [`CircularParticle::set_mcua_parameters`].
    pub fn set_mcua_parameters(
        &mut self,
        radius: f64,
        initial_angular_velocity: f64,
        angular_acceleration: f64,
        initial_angle: Option<f64>,
    ) -> Result<(), PhysicsError> {
        match self.particle.as_mut() {
            Some(particle) => particle.set_mcua_parameters(
                radius,
                initial_angular_velocity,
                angular_acceleration,
                initial_angle,
            ),
            None => {
                warn!("Simulator::set_mcua_parameters called without a particle; ignoring");
                Ok(())
            }
        }
    }

    /// Subscribes `callback`. Callbacks run in registration order after the
    /// elapsed time has been updated.
    ///
    /// A callback that returns `Err` or panics is logged and skipped for that
    /// tick; the remaining callbacks still run. Panics are only caught when the
    /// build unwinds (`wasm32` targets abort instead).
    pub fn on_update<F>(&mut self, callback: F) -> CallbackId
    where
        F: FnMut(&CircularParticle, f64) -> Result<(), Box<dyn Error>> + 'static,
    {
        let id = CallbackId(self.next_callback_id);
        self.next_callback_id += 1;
        self.subscribers.push(Subscriber { id, callback: Box::new(callback) });
        id
    }

    /// Returns whether a subscriber was removed.
    pub fn remove_update_callback(&mut self, id: CallbackId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Flips the velocity/acceleration overlay flag and returns the new value.
    pub fn toggle_vectors(&mut self) -> bool {
        self.display.show_vectors = !self.display.show_vectors;
        self.display.show_vectors
    }

    /// Flips the trail flag and returns the new value. Turning it off drops the trail.
    pub fn toggle_trail(&mut self) -> bool {
        self.display.show_trail = !self.display.show_trail;
        if !self.display.show_trail {
            self.trail.clear();
        }
        self.display.show_trail
    }

    pub fn display_options(&self) -> DisplayOptions {
        self.display
    }

    /// Recent positions, oldest first.
    pub fn trail(&self) -> impl Iterator<Item = &Vector2D> {
        self.trail.iter()
    }

    /// Full kinematic state at the current elapsed time, `None` without a particle.
    pub fn current_state(&self) -> Option<KinematicState> {
        self.particle.as_ref().map(|particle| particle.state(self.elapsed))
    }

    /// Re-centers the particle on a canvas of `width` x `height`.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), PhysicsError> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(PhysicsError::InvalidCanvasSize);
        }
        if let Some(particle) = self.particle.as_mut() {
            particle.set_center(Vector2D::new(width / 2.0, height / 2.0))?;
            self.trail.clear();
        }
        Ok(())
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Tears the simulator down: the pending tick is cancelled and every
    /// subscriber dropped.
    pub fn destroy(mut self) {
        self.pause();
        self.subscribers.clear();
        debug!("simulator destroyed");
    }

    fn cancel_pending_tick(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            self.scheduler.cancel_tick(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for Simulator<S> {
    fn drop(&mut self) {
        self.cancel_pending_tick();
    }
}

impl<S: FrameScheduler> fmt::Debug for Simulator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("particle", &self.particle)
            .field("status", &self.status)
            .field("elapsed", &self.elapsed)
            .field("pending_tick", &self.pending_tick)
            .field("subscribers", &self.subscribers.len())
            .field("display", &self.display)
            .finish()
    }
}

impl Simulator<VirtualClock> {
    /// Moves the virtual clock forward by `dt` seconds and delivers the ticks
    /// that fire. Returns how many advanced the simulation.
    pub fn run_frame(&mut self, dt: f64) -> usize {
        let ticks = self.scheduler.advance(dt);
        ticks.into_iter().filter(|tick| self.on_tick(*tick)).count()
    }
}
