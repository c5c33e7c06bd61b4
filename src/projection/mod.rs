//! Mapping of 3D coordinates onto 2D panel pixels for the six canonical views.
//!
//! The panel shows the rotation-display frame of the box: the frame's side maps onto the
//! smaller panel dimension, with the frame's lower corner at the pixel origin. Pixel X runs
//! to the right and pixel Y runs downwards.
//!
//! | View   | pixel X            | pixel Y            |
//! |--------|--------------------|--------------------|
//! | Front  | `x - frame.xlo`    | `frame.zhi - z`    |
//! | Back   | `frame.xhi - x`    | `frame.zhi - z`    |
//! | Left   | `frame.yhi - y`    | `frame.zhi - z`    |
//! | Right  | `y - frame.ylo`    | `frame.zhi - z`    |
//! | Top    | `x - frame.xlo`    | `frame.yhi - y`    |
//! | Bottom | `x - frame.xlo`    | `y - frame.ylo`    |
//!
//! All values are multiplied by the scale, then shifted by `+pixel_shift_x` and
//! `-pixel_shift_y`.

mod view;
pub use view::View;

use crate::{
    error::{check_count, Result},
    particle::{ParticlePosition, Position},
    Config, SimulationBox,
};

#[derive(Clone, Debug)]
pub struct ViewProjector {
    view: View,
    frame_lo: [f64; 3],
    frame_hi: [f64; 3],
    scale: f64,
    shift: [f64; 2],
    width: i64,
    height: i64,
}
impl ViewProjector {
    pub fn new(
        box_: &SimulationBox,
        view: View,
        panel_width: u32,
        panel_height: u32,
        config: &Config,
    ) -> Result<Self> {
        check_count("Panel width", panel_width as usize, 1)?;
        check_count("Panel height", panel_height as usize, 1)?;
        let frame = box_.rotation_display_frame();
        let side = frame.lx();
        Ok(Self {
            view,
            frame_lo: frame.lo(),
            frame_hi: frame.hi(),
            scale: panel_width.min(panel_height) as f64 / side,
            shift: [config.pixel_shift_x as f64, config.pixel_shift_y as f64],
            width: panel_width as i64,
            height: panel_height as i64,
        })
    }
    pub fn view(&self) -> View {
        self.view
    }
    /// Pixels per world length unit
    pub fn scale(&self) -> f64 {
        self.scale
    }
    /// Unrounded pixel coordinates
    pub fn project_exact(&self, coord: &[f64; 3]) -> [f64; 2] {
        let (h_axis, h_flipped) = self.view.horizontal();
        let (v_axis, v_downwards) = self.view.vertical();
        let (h, v) = (h_axis.index(), v_axis.index());
        let px = if h_flipped {
            self.frame_hi[h] - coord[h]
        } else {
            coord[h] - self.frame_lo[h]
        };
        let py = if v_downwards {
            coord[v] - self.frame_lo[v]
        } else {
            self.frame_hi[v] - coord[v]
        };
        [
            px * self.scale + self.shift[0],
            py * self.scale - self.shift[1],
        ]
    }
    pub fn project(&self, coord: &[f64; 3]) -> [i32; 2] {
        let [px, py] = self.project_exact(coord);
        [px.round() as i32, py.round() as i32]
    }
    pub fn project_all<P: Position>(&self, positions: &[P]) -> Vec<[i32; 2]> {
        positions.iter().map(|p| self.project(p.coord())).collect()
    }
    /// Whether the projected pixel falls outside `[0, width) x [0, height)`
    pub fn is_outside_panel(&self, coord: &[f64; 3]) -> bool {
        let [px, py] = self.project(coord);
        let px = px as i64;
        px < 0 || px >= self.width || self.is_outside_vertical(py)
    }
    /// Whether the projected pixel lies above or below the panel, ignoring pixel X
    pub fn is_outside_vertical_range(&self, coord: &[f64; 3]) -> bool {
        let [_, py] = self.project(coord);
        self.is_outside_vertical(py)
    }
    /// Set the in-frame flag of every particle from [`ViewProjector::is_outside_panel`];
    /// returns the number of particles in frame.
    pub fn mark_in_frame<D>(&self, particles: &mut [ParticlePosition<D>]) -> usize {
        let mut in_frame = 0;
        for particle in particles.iter_mut() {
            let inside = !self.is_outside_panel(particle.coord());
            particle.set_in_frame(inside);
            if inside {
                in_frame += 1;
            }
        }
        in_frame
    }

    fn is_outside_vertical(&self, py: i32) -> bool {
        let py = py as i64;
        py < 0 || py >= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Box whose rotation-display frame is exactly [0, 10]^3 would need an irrational
    /// side; instead use a cube of side 10/sqrt(3) centred at 5.
    fn box_with_frame_0_to_10() -> SimulationBox {
        let half = 5.0 / 3f64.sqrt();
        SimulationBox::new(5.0 - half, 5.0 + half, 5.0 - half, 5.0 + half, 5.0 - half, 5.0 + half)
            .unwrap()
    }

    fn projector(view: View, config: &Config) -> ViewProjector {
        ViewProjector::new(&box_with_frame_0_to_10(), view, 100, 100, config).unwrap()
    }

    #[rstest]
    #[case(View::Front, [20, 100 - 30])]
    #[case(View::Back, [100 - 20, 100 - 30])]
    #[case(View::Left, [100 - 40, 100 - 30])]
    #[case(View::Right, [40, 100 - 30])]
    #[case(View::Top, [20, 100 - 40])]
    #[case(View::Bottom, [20, 40])]
    fn projection_per_view(#[case] view: View, #[case] expected: [i32; 2]) {
        let p = projector(view, &Config::new());
        assert_eq!(p.project(&[2.0, 4.0, 3.0]), expected);
    }

    #[rstest]
    fn frame_center_projects_to_panel_center(
        #[values(View::Front, View::Back, View::Left, View::Right, View::Top, View::Bottom)]
        view: View,
    ) {
        let p = projector(view, &Config::new());
        assert_eq!(p.project(&[5.0, 5.0, 5.0]), [50, 50]);
    }

    #[test]
    fn pixel_shift_moves_right_and_up() {
        let mut config = Config::new();
        config.pixel_shift_x = 7;
        config.pixel_shift_y = 3;
        let p = projector(View::Front, &config);
        assert_eq!(p.project(&[5.0, 5.0, 5.0]), [57, 47]);
    }

    #[test]
    fn scale_uses_smaller_panel_side() {
        let p = ViewProjector::new(&box_with_frame_0_to_10(), View::Front, 300, 200, &Config::new())
            .unwrap();
        assert!((p.scale() - 20.0).abs() < 1e-9);
        assert!(ViewProjector::new(&box_with_frame_0_to_10(), View::Front, 0, 200, &Config::new())
            .is_err());
    }

    #[test]
    fn culling_predicates() {
        let p = projector(View::Front, &Config::new());
        assert!(!p.is_outside_panel(&[5.0, 5.0, 5.0]));
        // left of the panel but vertically fine
        assert!(p.is_outside_panel(&[-1.0, 5.0, 5.0]));
        assert!(!p.is_outside_vertical_range(&[-1.0, 5.0, 5.0]));
        // above the panel
        assert!(p.is_outside_panel(&[5.0, 5.0, 11.0]));
        assert!(p.is_outside_vertical_range(&[5.0, 5.0, 11.0]));
        // depth never matters
        assert!(!p.is_outside_panel(&[5.0, 1000.0, 5.0]));
    }

    #[test]
    fn marks_particles_in_frame() {
        let p = projector(View::Top, &Config::new());
        let mut particles = vec![
            ParticlePosition::new([5.0, 5.0, 5.0], 0),
            ParticlePosition::new([5.0, -3.0, 5.0], 1),
            ParticlePosition::new([9.0, 1.0, -50.0], 2),
        ];
        assert_eq!(p.mark_in_frame(&mut particles), 2);
        assert!(particles[0].is_in_frame());
        assert!(!particles[1].is_in_frame());
        assert!(particles[2].is_in_frame());
        assert_eq!(p.project_all(&particles)[0], [50, 50]);
    }
}
