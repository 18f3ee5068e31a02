use ansi_term::Colour;

pub fn log_success(data: &str) {
    println!("[{}]:{}", Colour::Green.paint("SUCCESS"), data);
}

pub fn log_failure(data: &str) {
    println!("[{}]:{}", Colour::Red.paint("FAILURE"), data);
}

pub fn log_event(data: &str) {
    println!("[{}]:{}", Colour::Purple.paint("EVENT"), data);
}

pub fn log_start(addr: &str) {
    println!(
        "{}",
        Colour::Cyan.paint(format!("Good Neighbor API running on {}", addr))
    );
}
