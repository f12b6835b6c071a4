use std::fs;

use pascalite::Config;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Runs every program under `demos/`. When a `.out` file sits next to a
/// program, the printed store must match it exactly.
#[test]
fn demo_programs_work() {
    let mut count = 0;
    let config = Config::default().with_max_loop_iterations(100_000);

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "pas"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let memory = pascalite::interpret(&source, config)
            .unwrap_or_else(|e| panic!("Demo {path:?} failed:\n{source}\nError: {e}"));

        let expected = path.with_extension("out");
        if expected.exists() {
            let expected = fs::read_to_string(&expected).unwrap_or_else(|e| {
                                                            panic!("Failed to read {expected:?}: {e}")
                                                        });
            assert_eq!(memory.to_string(), expected, "output of {path:?}");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[test]
fn part10_demo_leaves_expected_bindings() {
    let source = fs::read_to_string("demos/part10.pas").unwrap();
    let memory = pascalite::interpret(&source, Config::default()).unwrap();

    assert_eq!(memory.lookup("a").map(|v| v.to_string()), Some("31".to_string()));
    assert_eq!(memory.lookup("b").map(|v| v.to_string()), Some("30".to_string()));
    let y = memory.lookup("y").unwrap().as_real(Default::default()).unwrap();
    assert!((y - 20.0 / 7.0 - 3.0 - 0.14).abs() < 1e-9);
}
