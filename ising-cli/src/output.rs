use crate::error::Result;
use ising_sim::ResultStore;
use std::io::Write;
use std::path::Path;

/// Write one CSV row per temperature point, with a header.
pub fn write_csv<W: Write>(writer: W, results: &ResultStore) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in results.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, results: &ResultStore) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(file, results)
}

/// Human-readable table of the four main observables.
pub fn write_table<W: Write>(mut writer: W, results: &ResultStore) -> Result<()> {
    writeln!(
        writer,
        "{:>10} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "T", "E", "M", "|M|", "C", "X"
    )?;
    for row in results.rows() {
        writeln!(
            writer,
            "{:>10.4} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
            row.temperature,
            row.energy,
            row.magnetization,
            row.abs_magnetization,
            row.specific_heat,
            row.susceptibility
        )?;
    }
    if !results.energy_tau().is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{:>10} {:>12}", "T", "tau_E")?;
        for (t, tau) in results.temperatures().iter().zip(results.energy_tau()) {
            writeln!(writer, "{:>10.4} {:>12.3}", t, tau)?;
        }
    }
    Ok(())
}
