//! This module provides the `MissionLoader` struct, responsible for feeding whole missions
//! into a `LineProcessor` from various sources, including files and strings.

use crate::processor::LineProcessor;
use crate::types::{LineKind, RoverError};
use std::fs;
use std::path::Path;

/// What to do when a line is rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first rejected line and return its error.
    #[default]
    Abort,
    /// Record the rejected line and keep feeding the following ones.
    Continue,
}

/// A line that was rejected while running under `ErrorPolicy::Continue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the original input.
    pub line_number: usize,
    pub line: String,
    pub error: RoverError,
}

/// The result of running a mission: the processor holding every rover's final state, and
/// any lines that were skipped along the way.
#[derive(Debug)]
pub struct Mission {
    pub processor: LineProcessor,
    pub skipped: Vec<SkippedLine>,
}

impl Mission {
    /// Returns the formatted final position of every rover, in landing order.
    pub fn output_lines(&self) -> Vec<String> {
        self.processor.output_lines()
    }
}

/// `MissionLoader` is a utility struct for running rover missions.
/// It strips every input line, drops blank ones, and feeds the rest to a fresh
/// `LineProcessor` in order.
pub struct MissionLoader;

impl MissionLoader {
    /// Runs the mission stored in the specified file.
    ///
    /// # Returns
    ///
    /// * `Ok(Mission)` if the file is read and its lines processed under `policy`.
    /// * `Err(RoverError::FileError)` if the file cannot be read.
    /// * `Err(RoverError::AtLine)` for the first rejected line under `ErrorPolicy::Abort`.
    pub fn load_mission(path: &Path, policy: ErrorPolicy) -> Result<Mission, RoverError> {
        let content = Self::read_input(path)?;
        Self::run(&content, policy)
    }

    /// Reads raw mission text from a file.
    pub fn read_input(path: &Path) -> Result<String, RoverError> {
        fs::read_to_string(path).map_err(|e| {
            RoverError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })
    }

    /// Iterates over the non-blank lines of `content`, trimmed, with their 1-based
    /// line numbers.
    pub fn input_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
        content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
    }

    /// Runs the mission in `content`.
    ///
    /// Under `ErrorPolicy::Abort` the first rejected line is returned as
    /// `RoverError::AtLine`, wrapping the original error with its line number.
    pub fn run(content: &str, policy: ErrorPolicy) -> Result<Mission, RoverError> {
        Self::run_with(content, policy, |_, _, _| {})
    }

    /// Like `run`, but calls `observe` after every accepted line with its line number, the
    /// kind of line, and the processor's state after it.
    pub fn run_with<F>(
        content: &str,
        policy: ErrorPolicy,
        mut observe: F,
    ) -> Result<Mission, RoverError>
    where
        F: FnMut(usize, LineKind, &LineProcessor),
    {
        let mut processor = LineProcessor::new();
        let mut skipped = Vec::new();

        for (line_number, line) in Self::input_lines(content) {
            match processor.process_line(line) {
                Ok(kind) => observe(line_number, kind, &processor),
                Err(error) => match policy {
                    ErrorPolicy::Abort => return Err(error.at_line(line_number)),
                    ErrorPolicy::Continue => {
                        log::warn!("Skipping line {line_number}: {error}");
                        skipped.push(SkippedLine {
                            line_number,
                            line: line.to_string(),
                            error,
                        });
                    }
                },
            }
        }

        Ok(Mission { processor, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    const MISSION: &str = "
5 5
1 2 N
LMLMLMLMM
3 3 E
MMRMMRMRRM
        ";

    #[test]
    fn test_run_valid_mission() {
        let mission = MissionLoader::run(MISSION, ErrorPolicy::Abort).unwrap();

        assert_eq!(mission.output_lines(), vec!["1 3 N", "5 1 E"]);
        assert!(mission.skipped.is_empty());
    }

    #[test]
    fn test_input_lines_skip_blanks() {
        let lines: Vec<_> = MissionLoader::input_lines("\n  5 5  \n\t\n1 2 N\r\n").collect();
        assert_eq!(lines, vec![(2, "5 5"), (4, "1 2 N")]);
    }

    #[test]
    fn test_abort_reports_line_number() {
        let content = "5 5\n\nLMR\n1 2 N\n";
        let error = MissionLoader::run(content, ErrorPolicy::Abort).unwrap_err();

        match error {
            RoverError::AtLine {
                line_number,
                source,
            } => {
                assert_eq!(line_number, 3);
                assert!(matches!(*source, RoverError::InvalidLine { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_continue_skips_bad_lines() {
        let content = "5 5\n1 2 Q\n1 2 N\nMMM\n0 0 S\nM\nLM\n";
        let mission = MissionLoader::run(content, ErrorPolicy::Continue).unwrap();

        assert_eq!(mission.output_lines(), vec!["1 5 N", "1 0 E"]);
        assert_eq!(mission.skipped.len(), 2);
        assert_eq!(mission.skipped[0].line_number, 2);
        assert_eq!(mission.skipped[0].line, "1 2 Q");
        assert_eq!(mission.skipped[1].line_number, 6);
        assert!(matches!(
            mission.skipped[1].error,
            RoverError::OutOfBounds { x: 0, y: -1, .. }
        ));
    }

    #[test]
    fn test_run_with_observer() {
        let mut seen = Vec::new();
        MissionLoader::run_with(MISSION, ErrorPolicy::Abort, |n, kind, processor| {
            seen.push((n, kind, processor.rovers().len()));
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![
                (2, LineKind::Plateau, 0),
                (3, LineKind::Position, 1),
                (4, LineKind::Instructions, 1),
                (5, LineKind::Position, 2),
                (6, LineKind::Instructions, 2),
            ]
        );
    }

    #[test]
    fn test_load_mission_from_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("mission.txt");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(MISSION.as_bytes()).unwrap();

        let mission = MissionLoader::load_mission(&file_path, ErrorPolicy::Abort).unwrap();
        assert_eq!(mission.output_lines(), vec!["1 3 N", "5 1 E"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.txt");

        let result = MissionLoader::load_mission(&file_path, ErrorPolicy::Abort);
        assert!(matches!(result, Err(RoverError::FileError(_))));
    }
}
