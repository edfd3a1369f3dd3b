//! Kommandozeilen-Argumente der `waypoint-route`-Binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glam::Vec3;
use waypoint_route::{PathLineType, RouteOptions, SearchAccuracy};

/// Berechnet eine verfeinerte Route durch einen Wegpunkt-Graphen (JSON).
#[derive(Parser, Debug)]
#[command(name = "waypoint-route")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Graph-Datei im JSON-Format
    pub graph: PathBuf,

    /// Startpunkt als `x,y,z`
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub from: Vec3,

    /// Zielpunkt als `x,y,z`
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub to: Vec3,

    /// Linienführung der erzeugten Punktfolge
    #[arg(long, value_enum)]
    pub line_type: Option<LineTypeArg>,

    /// Genauigkeit der Endpunkt-Verfeinerung
    #[arg(long, value_enum)]
    pub accuracy: Option<AccuracyArg>,

    /// Abtastpunkte pro Kurvensegment
    #[arg(long)]
    pub samples: Option<usize>,

    /// Optionen-Datei (TOML); Standard: `waypoint_route.toml` neben der Binary
    #[arg(long)]
    pub options: Option<PathBuf>,
}

/// Linienführung als CLI-Wert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineTypeArg {
    /// Polyline durch alle Wegpunkte
    Straight,
    /// Abgetastete Catmull-Rom-Kurve
    Curve,
}

impl From<LineTypeArg> for PathLineType {
    fn from(arg: LineTypeArg) -> Self {
        match arg {
            LineTypeArg::Straight => PathLineType::Straight,
            LineTypeArg::Curve => PathLineType::CatmullRomCurve,
        }
    }
}

/// Genauigkeit als CLI-Wert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccuracyArg {
    /// Unveränderte Graph-Nodes
    Fast,
    /// Start/Ende auf die nächste Verbindung projizieren
    Accurate,
    /// Derzeit wie `accurate`
    Maximal,
}

impl From<AccuracyArg> for SearchAccuracy {
    fn from(arg: AccuracyArg) -> Self {
        match arg {
            AccuracyArg::Fast => SearchAccuracy::Fast,
            AccuracyArg::Accurate => SearchAccuracy::Accurate,
            AccuracyArg::Maximal => SearchAccuracy::Maximal,
        }
    }
}

impl Args {
    /// Überschreibt die geladenen Optionen mit expliziten CLI-Werten.
    pub fn apply_to(&self, options: &mut RouteOptions) {
        if let Some(line_type) = self.line_type {
            options.line_type = line_type.into();
        }
        if let Some(accuracy) = self.accuracy {
            options.accuracy = accuracy.into();
        }
        if let Some(samples) = self.samples {
            options.catmull_rom_samples_per_segment = samples;
        }
    }

    /// Pfad der Optionen-Datei (explizit oder neben der Binary).
    pub fn options_path(&self) -> PathBuf {
        self.options.clone().unwrap_or_else(RouteOptions::config_path)
    }
}

/// Parst `x,y,z` (Leerzeichen erlaubt) zu einem Punkt.
pub fn parse_vec3(value: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!(
            "erwartet drei Koordinaten `x,y,z`, erhalten: '{}'",
            value
        ));
    };

    let coord = |s: &str| {
        s.parse::<f32>()
            .map_err(|e| format!("ungültige Koordinate '{}': {}", s, e))
    };
    Ok(Vec3::new(coord(x)?, coord(y)?, coord(z)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3_accepts_spaces_and_negatives() {
        assert_eq!(parse_vec3("1.5, -2,3"), Ok(Vec3::new(1.5, -2.0, 3.0)));
    }

    #[test]
    fn test_parse_vec3_rejects_wrong_arity() {
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,2,3,4").is_err());
        assert!(parse_vec3("a,b,c").is_err());
    }

    #[test]
    fn test_cli_flags_override_options() {
        let args = Args::parse_from([
            "waypoint-route",
            "graph.json",
            "--from",
            "-1,0,0",
            "--to",
            "5,5,0",
            "--line-type",
            "curve",
            "--accuracy",
            "fast",
            "--samples",
            "6",
        ]);
        let mut options = RouteOptions::default();
        args.apply_to(&mut options);

        assert_eq!(args.from, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(options.line_type, PathLineType::CatmullRomCurve);
        assert_eq!(options.accuracy, SearchAccuracy::Fast);
        assert_eq!(options.catmull_rom_samples_per_segment, 6);
    }

    #[test]
    fn test_without_flags_options_stay() {
        let args = Args::parse_from([
            "waypoint-route",
            "g.json",
            "--from",
            "0,0,0",
            "--to",
            "1,1,1",
        ]);
        let mut options = RouteOptions {
            accuracy: SearchAccuracy::Maximal,
            ..RouteOptions::default()
        };
        args.apply_to(&mut options);
        assert_eq!(options.accuracy, SearchAccuracy::Maximal);
        assert_eq!(options.line_type, PathLineType::Straight);
        assert!(args.options.is_none());
    }

    #[test]
    fn test_line_type_switches_back_to_straight() {
        let args = Args::parse_from([
            "waypoint-route",
            "g.json",
            "--from",
            "0,0,0",
            "--to",
            "1,1,1",
            "--line-type",
            "straight",
        ]);
        let mut options = RouteOptions {
            line_type: PathLineType::CatmullRomCurve,
            ..RouteOptions::default()
        };
        args.apply_to(&mut options);
        assert_eq!(options.line_type, PathLineType::Straight);
    }
}
