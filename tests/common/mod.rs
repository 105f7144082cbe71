use cmder::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped => break,
            Event::Print(ps) => s.push_str(&ps),
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("?{}\n", error));
                }
            }
        }
    }
    s
}

pub fn stack(runtime: &Runtime) -> Vec<i32> {
    runtime.stack().iter().collect()
}

#[allow(dead_code)]
pub fn run(line: &str) -> (String, Vec<i32>) {
    let mut r = Runtime::default();
    r.enter(line);
    let out = exec(&mut r);
    (out, stack(&r))
}
