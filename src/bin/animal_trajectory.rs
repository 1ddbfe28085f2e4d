// Synthetic animal trajectory sample
//
// Generates a heading-smoothed random walk in a square box and renders the
// path together with histograms of x, y and head direction.

use arena_walk::trajectory::{RandomWalk, RandomWalkConfig, DEFAULT_STEP_SIZE};
use arena_walk::utils::{prepare_output_dir, quick_plot_trajectory, save_histogram_svg, DEFAULT_BINS};
use arena_walk::WalkError;

const SAMPLES: usize = 10_000;
const BOX_SIZE: f64 = 80.0;

fn main() -> Result<(), WalkError> {
    println!("Animal trajectory start!!");

    let config = RandomWalkConfig::new(BOX_SIZE, DEFAULT_STEP_SIZE);
    let mut walker = RandomWalk::new(config)?;
    let trajectory = walker.walk(SAMPLES)?;

    println!(
        "Generated {} poses, path length {:.1}, {} rejected headings",
        trajectory.len(),
        trajectory.total_length(),
        trajectory.rejections()
    );

    prepare_output_dir("./img")?;

    // plots are diagnostics only; a missing gnuplot install is not fatal
    match quick_plot_trajectory(&trajectory, BOX_SIZE, "Animal trajectory") {
        Ok(mut vis) => match vis.save_png("./img/animal_trajectory.png", 2000, 500) {
            Ok(_) => println!("Plot saved to ./img/animal_trajectory.png"),
            Err(e) => println!("Failed to save plot: {}", e),
        },
        Err(e) => println!("Failed to build plot: {}", e),
    }

    save_histogram_svg(trajectory.heading(), DEFAULT_BINS, "hd", "./img/animal_trajectory_hd.svg")?;
    println!("Histogram saved to ./img/animal_trajectory_hd.svg");

    println!("Done!");
    Ok(())
}
