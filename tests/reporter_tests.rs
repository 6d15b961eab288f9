//! Reporter tests.
//!
//! Many threads reporting into one sink must never produce a torn line.

use refreturn::report::Reporter;
use refreturn::syntax::Position;
use refreturn::visit::Match;
use std::path::PathBuf;
use std::thread;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrent_reports_emit_whole_lines() {
        let reporter = Reporter::new(Vec::new());
        let threads = 8;
        let per_thread = 200;

        thread::scope(|s| {
            for t in 0..threads {
                let reporter = &reporter;
                s.spawn(move || {
                    let file = PathBuf::from(format!("worker{}/file.go", t));
                    for i in 0..per_thread {
                        let found = Match {
                            position: Position {
                                line: i + 1,
                                column: 1,
                            },
                            function_name: format!("Func_{}_{}", t, i),
                        };
                        reporter.report(&file, &found).expect("Write to Vec cannot fail");
                    }
                });
            }
        });

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), threads * per_thread);

        for line in &lines {
            let (location, name) = line.split_once(": ").expect("Line should have a name");
            let worker = location
                .strip_prefix("worker")
                .and_then(|rest| rest.split('/').next())
                .expect("Line should start with its file");
            assert!(
                name.starts_with(&format!("Func_{}_", worker)),
                "Torn line: {}",
                line
            );
        }

        // Each thread's lines keep their relative order.
        for t in 0..threads {
            let prefix = format!("worker{}/", t);
            let own: Vec<&&str> = lines.iter().filter(|l| l.starts_with(&prefix)).collect();
            for (i, line) in own.iter().enumerate() {
                assert!(line.ends_with(&format!(": Func_{}_{}", t, i)));
            }
        }
    }
}
