//! Tick loop for one agent on an owned grid.

use std::fmt;

use log::{debug, info, trace};

use super::slip::SlipModel;
use super::{SimConfig, SimError};
use crate::agent::{Action, AgentDriver};
use crate::core::Position;
use crate::grid::Grid;

/// Outcome of a simulation run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimReport {
    pub ticks: u64,
    /// Moves that changed the agent's cell
    pub moves: u64,
    /// Clean actions that cleaned something
    pub cleans: u64,
    /// Moves blocked by a wall or the grid edge
    pub bumps: u64,
    /// Moves that drifted sideways
    pub slips: u64,
    pub idles: u64,
    /// Dirty and Target cells left at the end
    pub goals_remaining: usize,
    pub planning_calls: u64,
    pub nodes_opened: u64,
    pub sweeps: u64,
    /// Every goal was cleaned within the tick budget
    pub completed: bool,
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ticks: {}  completed: {}  goals remaining: {}",
            self.ticks, self.completed, self.goals_remaining
        )?;
        writeln!(
            f,
            "moves: {}  cleans: {}  bumps: {}  slips: {}  idles: {}",
            self.moves, self.cleans, self.bumps, self.slips, self.idles
        )?;
        writeln!(
            f,
            "planning calls: {}  nodes opened: {}  sweeps: {}",
            self.planning_calls, self.nodes_opened, self.sweeps
        )
    }
}

/// Single-agent simulation.
///
/// Owns its grid; the driver only ever sees it read-only.
pub struct Simulation {
    grid: Grid,
    position: Position,
    driver: Box<dyn AgentDriver>,
    config: SimConfig,
    slip: SlipModel,
    report: SimReport,
}

impl Simulation {
    /// Create a simulation with the agent at `start`
    pub fn new(
        grid: Grid,
        start: Position,
        driver: Box<dyn AgentDriver>,
        config: SimConfig,
    ) -> Result<Self, SimError> {
        if !grid.is_passable(start) {
            return Err(SimError::StartBlocked(start));
        }
        let slip = SlipModel::new(config.slip_probability, config.seed);
        let report = SimReport {
            goals_remaining: grid.counts().goals(),
            ..Default::default()
        };
        Ok(Self {
            grid,
            position: start,
            driver,
            config,
            slip,
            report,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Counters so far
    pub fn report(&self) -> SimReport {
        let stats = self.driver.stats();
        SimReport {
            planning_calls: stats.planning_calls,
            nodes_opened: stats.nodes_opened,
            sweeps: stats.sweeps,
            ..self.report
        }
    }

    /// Advance one tick. Returns the action the driver chose.
    pub fn tick(&mut self) -> Result<Action, SimError> {
        let action = self.driver.next_action(self.position, &self.grid)?;
        self.report.ticks += 1;

        match action {
            Action::Clean => {
                if self.grid.clean(self.position) {
                    self.report.cleans += 1;
                    self.report.goals_remaining = self.grid.counts().goals();
                    debug!(
                        "[Simulation] cleaned {} ({} goals left)",
                        self.position, self.report.goals_remaining
                    );
                }
            }
            Action::Idle => self.report.idles += 1,
            Action::Move(intended) => {
                let (taken, slipped) = self.slip.sample(intended);
                if slipped {
                    self.report.slips += 1;
                }
                let next = self.position.step(taken);
                if self.grid.is_passable(next) {
                    self.position = next;
                    self.report.moves += 1;
                } else {
                    self.report.bumps += 1;
                }
                trace!(
                    "[Simulation] tick {}: intended {:?}, took {:?}, at {}",
                    self.report.ticks, intended, taken, self.position
                );
            }
        }
        Ok(action)
    }

    /// Tick until every goal is cleaned or the tick budget runs out
    pub fn run(&mut self) -> Result<SimReport, SimError> {
        while self.report.goals_remaining > 0 && self.report.ticks < self.config.max_ticks {
            self.tick()?;
        }
        self.report.completed = self.report.goals_remaining == 0;

        let report = self.report();
        info!(
            "[Simulation] finished after {} ticks: completed={} goals_remaining={}",
            report.ticks, report.completed, report.goals_remaining
        );
        Ok(report)
    }
}
