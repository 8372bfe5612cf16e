//! Simulation engine: the host loop around the steering agents.
//!
//! `SimulationEngine` owns the hecs ECS world and the collision world,
//! processes host commands, runs all systems, and produces
//! `WorldSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::{BTreeMap, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use steering_ai::SteeringAgent;
use steering_core::commands::SimCommand;
use steering_core::components::Goal;
use steering_core::constants::DT;
use steering_core::state::WorldSnapshot;
use steering_core::types::{AgentId, SimTime};
use steering_physics::CollisionWorld;

use crate::error::SimError;
use crate::scenario::{AgentSpec, ObstacleSpec, WallSpec};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Tick length in seconds.
    pub dt: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42, dt: DT }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    colliders: CollisionWorld,
    time: SimTime,
    dt: f64,
    rng: ChaCha8Rng,
    next_agent_id: u32,
    agents: BTreeMap<AgentId, hecs::Entity>,
    command_queue: VecDeque<SimCommand>,
}

impl SimulationEngine {
    /// Create an empty simulation with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            colliders: CollisionWorld::new(),
            time: SimTime::default(),
            dt: config.dt,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_agent_id: 0,
            agents: BTreeMap::new(),
            command_queue: VecDeque::new(),
        }
    }

    // --- Setup ---

    /// Spawn a steering agent and return its id. Ids count up from 0.
    pub fn spawn_agent(&mut self, desc: &AgentSpec) -> Result<AgentId, SimError> {
        let id = AgentId(self.next_agent_id);
        let entity = world_setup::spawn_agent(
            &mut self.world,
            &mut self.colliders,
            &mut self.rng,
            id,
            desc,
        )?;
        self.next_agent_id += 1;
        self.agents.insert(id, entity);
        Ok(id)
    }

    pub fn spawn_wall(&mut self, desc: &WallSpec) -> hecs::Entity {
        world_setup::spawn_wall(&mut self.world, &mut self.colliders, desc)
    }

    pub fn spawn_obstacle(&mut self, desc: &ObstacleSpec) -> hecs::Entity {
        world_setup::spawn_obstacle(&mut self.world, &mut self.colliders, desc)
    }

    // --- Commands ---

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> WorldSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance(self.dt);
        systems::snapshot::build_snapshot(&self.world, &self.time)
    }

    // --- Accessors ---

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn colliders(&self) -> &CollisionWorld {
        &self.colliders
    }

    /// Ids of all spawned agents, ascending.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.keys().copied()
    }

    /// Entity backing `id`.
    pub fn agent_entity(&self, id: AgentId) -> Result<hecs::Entity, SimError> {
        self.agents
            .get(&id)
            .copied()
            .ok_or(SimError::UnknownAgent(id))
    }

    /// Current snapshot without advancing time.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.time)
    }

    /// Process all queued commands. Commands for unknown agents are
    /// dropped with a warning.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(&command) {
                warn!(?command, %err, "command dropped");
            }
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: &SimCommand) -> Result<(), SimError> {
        let entity = self.agent_entity(command.agent())?;
        let now = self.time.elapsed_secs;

        let (goal, agent) = self
            .world
            .query_one_mut::<(&mut Goal, &mut SteeringAgent)>(entity)
            .map_err(|_| SimError::UnknownAgent(command.agent()))?;

        match *command {
            SimCommand::SetTarget { target, .. } => goal.target = Some(target),
            SimCommand::ClearTarget { .. } => goal.target = None,
            SimCommand::SetMode { mode, .. } => goal.mode = mode,
            SimCommand::SetSpeed { speed, .. } => agent.set_speed(speed.max(0.0)),
            SimCommand::SetCanMove { can_move, .. } => agent.set_can_move(can_move),
            SimCommand::PauseAgent { duration, .. } => agent.pause(now, duration),
        }
        debug!(?command, "command applied");
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Move agent colliders to where their bodies are
        systems::colliders::sync(&self.world, &mut self.colliders);
        // 2. Steering (reads colliders, writes velocity)
        systems::steering::run(&mut self.world, &self.colliders, &self.time, self.dt as f32);
        // 3. Movement integration
        systems::movement::run(&mut self.world, self.dt as f32);
    }
}
