use std::sync::Arc;
use std::thread;

use cstrip::Module;
use serde_json::json;

#[test]
fn shared_module_across_threads() {
    let module = Arc::new(Module::cstrip());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let module = Arc::clone(&module);
            thread::spawn(move || {
                for j in 0..200 {
                    let word = format!("t{i}-{j}");
                    let padded = format!(" \t{word}\r\n");
                    let out = module
                        .call("strip", &[json!(padded)])
                        .expect("strip is registered")
                        .expect("valid argument");
                    assert_eq!(out, json!(word));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }
}

#[test]
fn errors_are_isolated_per_call() {
    let module = Arc::new(Module::cstrip());

    let bad = {
        let module = Arc::clone(&module);
        thread::spawn(move || module.call("strip", &[json!(1)]))
    };
    let good = {
        let module = Arc::clone(&module);
        thread::spawn(move || module.call("strip", &[json!("  ok  ")]))
    };

    assert!(matches!(bad.join().expect("bad thread"), Some(Err(_))));
    assert_eq!(good.join().expect("good thread"), Some(Ok(json!("ok"))));
}
