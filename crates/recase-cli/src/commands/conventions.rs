use recase_core::{Colors, Convention, convert};

const SAMPLE: &str = "My name is  Dieko";

pub struct ConventionsArgs {
    pub color: bool,
}

pub fn run(args: ConventionsArgs) {
    print!("{}", render(Colors::new(args.color)));
}

pub fn render(colors: Colors) -> String {
    let mut out = format!(
        "Supported conventions ({}), sample {}{SAMPLE:?}{}:\n",
        Convention::ALL.len(),
        colors.dim,
        colors.reset
    );
    for convention in Convention::ALL {
        let sample = convert(SAMPLE, convention).unwrap_or_else(|e| e.to_string());
        out.push_str(&format!(
            "  {:<6} {}{sample}{}\n",
            convention.name(),
            colors.green,
            colors.reset
        ));
    }
    out
}
