use csv::Writer;
use std::fs::File;
use std::io::{self, Write};

/// Saves sampled curve data as a tab-separated table with a header row.
pub fn save_curve_to_file(
    points: &[(f64, f64)],
    arg: &str,
    value: &str,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "{}\t{}", arg, value)?;
    for (x, y) in points {
        writeln!(file, "{}\t{}", x, y)?;
    }
    Ok(())
}

/// Saves sampled curve data as CSV with a header row.
pub fn save_curve_to_csv(
    points: &[(f64, f64)],
    arg: &str,
    value: &str,
    filename: &str,
) -> Result<(), csv::Error> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record([arg, value])?;
    for (x, y) in points {
        writer.write_record([x.to_string(), y.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_curve_to_file() {
        let points = vec![(0.0, 1.0), (0.5, 1.25)];
        let path = std::env::temp_dir().join("rusted_calc_steps_curve.txt");
        save_curve_to_file(&points, "x", "x^2 + 1", path.to_str().unwrap()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("x\tx^2 + 1"));
        assert!(contents.contains("0.5\t1.25"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_curve_to_csv() {
        let points = vec![(1.0, 2.0)];
        let path = std::env::temp_dir().join("rusted_calc_steps_curve.csv");
        save_curve_to_csv(&points, "x", "f", path.to_str().unwrap()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("x,f"));
        assert!(contents.contains("1,2"));
        let _ = std::fs::remove_file(&path);
    }
}
