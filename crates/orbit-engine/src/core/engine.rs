use glam::Vec2;
use log::{debug, info, warn};

use super::collision::{pair_mut, resolve};
use super::particle::Particle;
use super::rng::Rng;
use crate::api::config::EngineConfig;
use crate::api::env::{ContainerSize, FrameClock, FrameHandle, GeometryProvider, MarkerGeometry, MarkerSink};
use crate::api::types::{FrameReport, MarkerId};
use crate::layout::placement::{clamp_to_container, initial_position, marker_size};

/// Seed used when the config leaves it to the engine.
const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Drives a fixed set of markers around a bounded container.
///
/// Layout reads, offset writes and frame scheduling all go through the
/// injected environment, so the same engine runs in the browser bridge and
/// in headless tests.
///
/// Lifecycle: `start` builds particles and requests the first frame; the
/// host calls `frame` from every clock callback, which steps once and
/// requests the next; `stop` clears the running flag and cancels the
/// outstanding request.
pub struct OrbitEngine<G, S, C> {
    config: EngineConfig,
    geometry: G,
    sink: S,
    clock: C,
    rng: Rng,
    particles: Vec<Particle>,
    container: ContainerSize,
    running: bool,
    pending: Option<FrameHandle>,
}

impl<G, S, C> OrbitEngine<G, S, C>
where
    G: GeometryProvider,
    S: MarkerSink,
    C: FrameClock,
{
    pub fn new(config: EngineConfig, geometry: G, sink: S, clock: C) -> Self {
        let rng = Rng::new(config.seed.unwrap_or(DEFAULT_SEED));
        Self {
            config,
            geometry,
            sink,
            clock,
            rng,
            particles: Vec::new(),
            container: ContainerSize::default(),
            running: false,
            pending: None,
        }
    }

    /// Build particles from the current layout and begin the frame loop.
    ///
    /// Does nothing if already running. With no container or no markers the
    /// engine stays inert and this returns false.
    pub fn start(&mut self) -> bool {
        if self.running {
            return true;
        }

        let Some(container) = self.geometry.container() else {
            debug!("orbit: no container, staying inert");
            return false;
        };
        let markers = self.geometry.markers();
        if markers.is_empty() {
            debug!("orbit: no markers, staying inert");
            return false;
        }

        self.container = container;
        let particles: Vec<Particle> = markers
            .iter()
            .enumerate()
            .map(|(i, geometry)| self.spawn_particle(MarkerId(i as u32), geometry))
            .collect();
        self.particles = particles;

        for p in &self.particles {
            self.sink.prepare(p.marker);
            self.sink.set_offset(p.marker, p.pos.x, p.pos.y);
        }

        self.running = true;
        info!(
            "orbit: started with {} markers in {}x{}",
            self.particles.len(),
            container.width,
            container.height
        );
        self.schedule_next();
        self.running
    }

    /// Halt the frame loop. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.running {
            info!("orbit: stopped");
        }
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.clock.cancel_frame(handle);
        }
    }

    /// Frame clock callback: step once and request the next frame.
    /// Returns `None` without stepping when the engine is not running.
    pub fn frame(&mut self) -> Option<FrameReport> {
        if !self.running {
            return None;
        }
        // The handle that brought us here has fired.
        self.pending = None;

        let report = self.step();
        if self.running {
            self.schedule_next();
        }
        Some(report)
    }

    /// Advance every particle by one frame and write the results out.
    ///
    /// Particles are processed in creation order. A particle is integrated,
    /// bounced off the walls, then tested against every other particle,
    /// including ones already moved this frame. Collision pushes can land
    /// outside the container, so a final pass clamps every particle before
    /// its offset is written.
    pub fn step(&mut self) -> FrameReport {
        if let Some(container) = self.geometry.container() {
            self.container = container;
        }
        let container = self.container;
        let mut report = FrameReport::default();

        let count = self.particles.len();
        for i in 0..count {
            let particle = &mut self.particles[i];
            particle.integrate();
            report.wall_hits += particle.bounce(container);

            for j in 0..count {
                if i == j {
                    continue;
                }
                let (a, b) = pair_mut(&mut self.particles, i, j);
                if resolve(a, b) {
                    report.collisions += 1;
                }
            }
        }

        for p in &mut self.particles {
            p.clamp_into(container);
            self.sink.set_offset(p.marker, p.pos.x, p.pos.y);
        }

        report
    }

    /// Re-read the container and pull every particle back inside it.
    /// Velocities are left untouched.
    pub fn handle_resize(&mut self) {
        if self.particles.is_empty() {
            return;
        }
        if let Some(container) = self.geometry.container() {
            self.container = container;
        }
        let container = self.container;
        debug!("orbit: resized to {}x{}", container.width, container.height);

        for p in &mut self.particles {
            p.clamp_into(container);
            self.sink.set_offset(p.marker, p.pos.x, p.pos.y);
        }
    }

    fn spawn_particle(&mut self, marker: MarkerId, geometry: &MarkerGeometry) -> Particle {
        let size = marker_size(geometry, self.config.fallback_marker_size());
        let pos = clamp_to_container(initial_position(geometry, size, self.container), size, self.container);
        let speed = self.config.speed_for_size(size);
        let angle = self.rng.next_angle();
        let vel = Vec2::from_angle(angle) * speed;
        Particle::new(marker, pos, vel, size)
    }

    fn schedule_next(&mut self) {
        match self.clock.request_frame() {
            Some(handle) => self.pending = Some(handle),
            None => {
                warn!("orbit: frame clock refused to schedule, stopping");
                self.running = false;
            }
        }
    }

    // ---- Accessors ----

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Direct particle access for hosts that seed their own motion.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn container(&self) -> ContainerSize {
        self.container
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
