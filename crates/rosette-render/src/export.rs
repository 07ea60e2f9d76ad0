//! Tabular export of orbit samples

use rosette_sim::OrbitSample;
use std::io::Write;

/// Write samples as CSV with a `theta,radius,x,y` header
pub fn write_csv<W: Write>(samples: &[OrbitSample], writer: W) -> Result<(), csv::Error> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(["theta", "radius", "x", "y"])?;
    for s in samples {
        w.write_record(&[
            s.theta.to_string(),
            s.radius.to_string(),
            s.x.to_string(),
            s.y.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Write samples as a pretty-printed JSON array
pub fn write_json<W: Write>(samples: &[OrbitSample], writer: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, samples)
}
