use std::fmt;

use crossbeam_channel::{Receiver, unbounded};
use log::{info, trace};

use crate::{
    face::Face,
    grid::CubeGrid,
    piece::Piece,
    rotation::Turn,
};

type ChangedListener = Box<dyn FnMut(&CubeGrid)>;
type SolvedListener = Box<dyn FnMut()>;

/// A message sent to subscribers of [`Cube::events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeEvent {
    /// The cube was turned. Carries a copy of the grid after the turn.
    Changed(CubeGrid),
    /// The cube went from unsolved to solved.
    Solved,
}

/// The cube model: owns the grid and tells listeners about every turn.
///
/// Listeners are called synchronously, before [`Cube::rotate`] returns, in the
/// order they were registered. All "changed" listeners run before any "solved"
/// listener. A panicking listener unwinds through `rotate`.
pub struct Cube {
    grid: CubeGrid,
    solved: bool,
    changed_listeners: Vec<ChangedListener>,
    solved_listeners: Vec<SolvedListener>,
}

impl Cube {
    /// A solved cube with nobody listening.
    pub fn new() -> Cube {
        Cube::from_grid(CubeGrid::solved())
    }

    pub fn from_grid(grid: CubeGrid) -> Cube {
        Cube {
            solved: grid.is_solved(),
            grid,
            changed_listeners: Vec::new(),
            solved_listeners: Vec::new(),
        }
    }

    /// Register a listener called with the whole grid after every turn.
    pub fn on_changed(&mut self, listener: impl FnMut(&CubeGrid) + 'static) {
        self.changed_listeners.push(Box::new(listener));
    }

    /// Register a listener called whenever a turn brings the cube back to solved.
    pub fn on_solved(&mut self, listener: impl FnMut() + 'static) {
        self.solved_listeners.push(Box::new(listener));
    }

    /// Subscribe to both signals through a channel instead of callbacks.
    ///
    /// Messages are queued on the channel before `rotate` returns. Once the
    /// receiver is dropped the messages are discarded.
    pub fn events(&mut self) -> Receiver<CubeEvent> {
        let (tx, rx) = unbounded();

        let changed_tx = tx.clone();
        self.on_changed(move |grid| {
            let _ = changed_tx.send(CubeEvent::Changed(grid.clone()));
        });
        self.on_solved(move || {
            let _ = tx.send(CubeEvent::Solved);
        });

        rx
    }

    /// Turn `face` a quarter turn, clockwise as seen from outside the cube.
    pub fn rotate(&mut self, face: Face, clockwise: bool) {
        self.turn(Turn::new(face, clockwise));
    }

    pub fn turn(&mut self, turn: Turn) {
        self.grid.apply_turn(turn);

        trace!(
            "Notifying {} change listener(s)",
            self.changed_listeners.len()
        );
        for listener in &mut self.changed_listeners {
            listener(&self.grid);
        }

        let was_solved = self.solved;
        self.solved = self.grid.is_solved();

        if self.solved && !was_solved {
            info!("Cube is solved");
            for listener in &mut self.solved_listeners {
                listener();
            }
        }
    }

    /// Perform every turn in order, notifying after each one.
    pub fn apply(&mut self, turns: &[Turn]) {
        for &turn in turns {
            self.turn(turn);
        }
    }

    pub fn grid(&self) -> &CubeGrid {
        &self.grid
    }

    /// # Panics
    ///
    /// Panics if any component is not in `0..3`.
    pub fn piece_at(&self, x: usize, y: usize, z: usize) -> &Piece {
        self.grid.piece_at(x, y, z)
    }

    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    pub fn to_text(&self) -> String {
        self.grid.to_text()
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::new()
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cube")
            .field("grid", &self.grid)
            .field("solved", &self.solved)
            .field("changed_listeners", &self.changed_listeners.len())
            .field("solved_listeners", &self.solved_listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn listeners_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut cube = Cube::new();

        for name in ["first", "second"] {
            let log = Rc::clone(&log);
            cube.on_changed(move |_| log.borrow_mut().push(name));
        }
        {
            let log = Rc::clone(&log);
            cube.on_solved(move || log.borrow_mut().push("solved"));
        }

        cube.rotate(Face::Up, true);
        assert_eq!(*log.borrow(), ["first", "second"]);

        cube.rotate(Face::Up, false);
        assert_eq!(
            *log.borrow(),
            ["first", "second", "first", "second", "solved"]
        );
    }

    #[test]
    fn solved_fires_only_on_transition() {
        let count = Rc::new(RefCell::new(0));
        let mut cube = Cube::new();
        {
            let count = Rc::clone(&count);
            cube.on_solved(move || *count.borrow_mut() += 1);
        }

        // Starting solved is not a transition
        assert!(cube.is_solved());
        for _ in 0..3 {
            cube.rotate(Face::Front, true);
        }
        assert!(!cube.is_solved());
        cube.rotate(Face::Front, true);
        assert!(cube.is_solved());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn changed_listener_sees_committed_grid() {
        let seen = Rc::new(RefCell::new(None));
        let mut cube = Cube::new();
        {
            let seen = Rc::clone(&seen);
            cube.on_changed(move |grid| *seen.borrow_mut() = Some(grid.clone()));
        }

        cube.rotate(Face::Right, false);
        assert_eq!(seen.borrow().as_ref(), Some(cube.grid()));
    }

    #[test]
    #[should_panic(expected = "listener failed")]
    fn listener_panics_propagate() {
        let mut cube = Cube::new();
        cube.on_changed(|_| panic!("listener failed"));
        cube.rotate(Face::Down, true);
    }

    #[test]
    fn event_channel_orders_changed_before_solved() {
        let mut cube = Cube::new();
        let events = cube.events();

        cube.rotate(Face::Back, true);
        cube.rotate(Face::Back, false);

        let received = events.try_iter().collect::<Vec<_>>();
        assert_eq!(received.len(), 3);
        assert!(matches!(&received[0], CubeEvent::Changed(grid) if !grid.is_solved()));
        assert!(matches!(&received[1], CubeEvent::Changed(grid) if grid.is_solved()));
        assert_eq!(received[2], CubeEvent::Solved);
    }
}
