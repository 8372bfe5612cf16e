//! Scenario definitions loaded from JSON.
//!
//! A scenario lists the agents, walls and obstacles to spawn, how long to
//! run, and commands to inject at given ticks. Every field has a default,
//! so a minimal file only names what it needs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use steering_core::commands::SimCommand;
use steering_core::config::SteeringConfig;
use steering_core::constants::TICK_RATE;
use steering_core::enums::TravelMode;
use steering_core::types::{AgentId, Vec2};

use crate::engine::{SimConfig, SimulationEngine};
use crate::error::SimError;

/// Default run length: ten seconds.
const DEFAULT_TICKS: u64 = 10 * TICK_RATE as u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    /// RNG seed; the runner's `--seed` overrides it.
    pub seed: u64,
    pub ticks: u64,
    pub agents: Vec<AgentSpec>,
    pub walls: Vec<WallSpec>,
    pub obstacles: Vec<ObstacleSpec>,
    pub commands: Vec<ScheduledCommand>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: "unnamed".to_string(),
            seed: SimConfig::default().seed,
            ticks: DEFAULT_TICKS,
            agents: Vec::new(),
            walls: Vec::new(),
            obstacles: Vec::new(),
            commands: Vec::new(),
        }
    }
}

/// One agent to spawn. Ids are assigned in list order starting at 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSpec {
    pub position: Vec2,
    pub mode: TravelMode,
    pub target: Option<Vec2>,
    /// Tag carried by the agent's own collider, seen by other agents.
    pub tag: Option<String>,
    pub config: SteeringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSpec {
    pub center: Vec2,
    pub half_extents: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub center: Vec2,
    pub radius: f32,
    #[serde(default)]
    pub tag: Option<String>,
}

/// A command queued just before the given tick runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledCommand {
    pub tick: u64,
    pub command: SimCommand,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_json(&json)?;
        info!(
            name = %scenario.name,
            agents = scenario.agents.len(),
            walls = scenario.walls.len(),
            obstacles = scenario.obstacles.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Build an engine with everything spawned, using `seed` in place of
    /// the scenario's own when given.
    pub fn build(&self, seed: Option<u64>) -> Result<SimulationEngine, SimError> {
        let mut engine = SimulationEngine::new(SimConfig {
            seed: seed.unwrap_or(self.seed),
            ..Default::default()
        });
        for wall in &self.walls {
            engine.spawn_wall(wall);
        }
        for obstacle in &self.obstacles {
            engine.spawn_obstacle(obstacle);
        }
        for agent in &self.agents {
            engine.spawn_agent(agent)?;
        }
        Ok(engine)
    }

    /// Commands scheduled for `tick`, in file order.
    pub fn commands_at(&self, tick: u64) -> impl Iterator<Item = &SimCommand> + '_ {
        self.commands
            .iter()
            .filter(move |scheduled| scheduled.tick == tick)
            .map(|scheduled| &scheduled.command)
    }

    /// Built-in demo: two seekers detouring around a wall toward a point
    /// that a third agent orbits, with a scattering of obstacles.
    pub fn demo() -> Self {
        let goal = Vec2::new(8.0, 0.0);
        let seeker = |position: Vec2| AgentSpec {
            position,
            mode: TravelMode::Seek,
            target: Some(goal),
            tag: Some("Enemy".to_string()),
            config: SteeringConfig::default(),
        };

        Self {
            name: "demo".to_string(),
            agents: vec![
                seeker(Vec2::new(0.0, 0.5)),
                seeker(Vec2::new(0.0, -0.5)),
                AgentSpec {
                    position: Vec2::new(8.0, 3.0),
                    mode: TravelMode::Orbit,
                    target: Some(goal),
                    tag: Some("Enemy".to_string()),
                    config: SteeringConfig {
                        orbit_radius: 1.5,
                        ..Default::default()
                    },
                },
            ],
            walls: vec![WallSpec {
                center: Vec2::new(4.0, 0.0),
                half_extents: Vec2::new(0.25, 1.5),
            }],
            obstacles: vec![
                ObstacleSpec {
                    center: Vec2::new(2.0, 2.0),
                    radius: 0.3,
                    tag: None,
                },
                ObstacleSpec {
                    center: Vec2::new(6.0, -1.5),
                    radius: 0.3,
                    tag: None,
                },
            ],
            commands: vec![ScheduledCommand {
                tick: 4 * TICK_RATE as u64,
                command: SimCommand::PauseAgent {
                    agent: AgentId(2),
                    duration: 1.0,
                },
            }],
            ..Default::default()
        }
    }
}
