use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use log::debug;

use crate::{cube::Cube, face::Face, grid::CubeGrid};

/// Something that shows the cube to a user.
pub trait CubeView {
    /// Draw the cube as it is now.
    fn render(&mut self, grid: &CubeGrid);

    /// Called once each time the cube becomes solved.
    fn solved(&mut self);
}

/// Connects a [`Cube`] to a [`CubeView`]: model changes are rendered, and turn
/// requests coming from the view's input are forwarded to the model.
pub struct CubeController<V: CubeView> {
    cube: Cube,
    view: Rc<RefCell<V>>,
}

impl<V: CubeView + 'static> CubeController<V> {
    /// Wire `view` to `cube` and render the cube's current state once.
    pub fn new(mut cube: Cube, view: V) -> Self {
        let view = Rc::new(RefCell::new(view));

        {
            let view = Rc::clone(&view);
            cube.on_changed(move |grid| view.borrow_mut().render(grid));
        }
        {
            let view = Rc::clone(&view);
            cube.on_solved(move || view.borrow_mut().solved());
        }

        view.borrow_mut().render(cube.grid());

        CubeController { cube, view }
    }
}

impl<V: CubeView> CubeController<V> {
    /// Handle a turn the user asked for, e.g. by dragging a side of the cube.
    pub fn request_turn(&mut self, face: Face, clockwise: bool) {
        debug!("Turn requested: {face:?} clockwise={clockwise}");
        self.cube.rotate(face, clockwise);
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// # Panics
    ///
    /// Panics if called while the view is rendering.
    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }
}
