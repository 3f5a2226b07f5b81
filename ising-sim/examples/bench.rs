use std::time::Instant;

use ising_sim::{run, SimConfig};

const L: usize = 64;
const N_TEMPS: usize = 16;
const EQ_STEPS: usize = 200;
const MC_STEPS: usize = 200;

fn main() {
    let config = SimConfig {
        lattice_size: L,
        n_temps: N_TEMPS,
        eq_steps: EQ_STEPS,
        mc_steps: MC_STEPS,
        t_start: 1.5,
        t_end: 3.5,
        ..SimConfig::default()
    };

    println!(
        "Lattice: {}x{}  |  Temps: {}  |  Sweeps/temp: {} + {}",
        L, L, N_TEMPS, EQ_STEPS, MC_STEPS
    );
    println!("{}", "-".repeat(70));

    for sequential in [true, false] {
        let cfg = SimConfig {
            sequential,
            ..config.clone()
        };
        let t0 = Instant::now();
        run(&cfg).unwrap();
        let elapsed = t0.elapsed().as_secs_f64();

        let flips = (cfg.total_sweeps() * cfg.n_sites()) as f64;
        println!(
            "{:<10} Total: {:.3} s  |  {:.2} ns/flip",
            if sequential { "sequential" } else { "parallel" },
            elapsed,
            elapsed / flips * 1e9
        );
    }
}
