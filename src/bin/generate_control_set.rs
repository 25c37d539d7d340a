// Control-set generation batch for a state-lattice planner.
//
// Writes a 16-heading control set to a text file (default
// control_set.txt), expanding each generating primitive into its
// 4-fold rotation family. Pass --plot to render the generated families
// with gnuplot.
//
// Usage: generate_control_set [output_file] [--plot]

use std::env;
use std::error::Error;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;

use lattice_control_set::common::{NullSink, State, TrajectorySink};
use lattice_control_set::control_set::{save_primitive_family, ControlSet, Primitive};
use lattice_control_set::curve::QuadraticSpiral;
use lattice_control_set::discretization::UniformAngleGrid;
use lattice_control_set::utils::FamilyPlotter;

const ANGLE_BINS: usize = 16;

/// Generating primitives for heading 0. Symmetry supplies the other
/// quadrants; intermediate headings get their own fitted curves in a
/// full deployment.
fn generating_primitives() -> Result<Vec<Primitive<QuadraticSpiral>>, Box<dyn Error>> {
    let mut prims = Vec::new();

    // short and long straight hops
    for &length in &[1.0, 3.0] {
        prims.push(Primitive::new(
            State::origin_heading(0.0, 0.0),
            State::new(length, 0.0, 0.0, 0.0),
            QuadraticSpiral::straight(length),
        )?);
    }

    // quarter-turn arcs, left and right: curvature 1/2 over length pi
    // ends exactly at (2, +-2) with heading +-pi/2
    prims.push(Primitive::new(
        State::origin_heading(0.0, 0.5),
        State::new(2.0, 2.0, FRAC_PI_2, 0.5),
        QuadraticSpiral::arc(0.5, PI),
    )?);
    prims.push(Primitive::new(
        State::origin_heading(0.0, -0.5),
        State::new(2.0, -2.0, -FRAC_PI_2, -0.5),
        QuadraticSpiral::arc(-0.5, PI),
    )?);

    Ok(prims)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let plot = args.iter().any(|a| a == "--plot");
    let output = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| "control_set.txt".to_string());

    let angles = UniformAngleGrid::new(ANGLE_BINS)?;
    let mut file = File::create(&output)?;

    let mut plotter = FamilyPlotter::new();
    let mut null = NullSink;
    let mut written = 0;
    {
        let viz: &mut dyn TrajectorySink = if plot { &mut plotter } else { &mut null };
        for prim in generating_primitives()? {
            written += save_primitive_family(&mut file, &prim, &angles, true, viz)?;
        }
    }

    println!("wrote {} primitives to {}", written, output);

    let control_set = ControlSet::load_file(&output, ANGLE_BINS)?;
    for heading in 0..control_set.bins() {
        let count = control_set.primitives_for(heading).len();
        if count > 0 {
            println!("  heading {:2}: {} primitives", heading, count);
        }
    }

    if plot {
        let mut vis = plotter.into_visualizer("control set families");
        vis.draw_grid(-4, 4);
        vis.show().map_err(Box::<dyn Error>::from)?;
    }

    Ok(())
}
