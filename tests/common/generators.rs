/// Go source generators for benchmarks and large-scale tests.
use std::fmt::Write;

/// Generate a Go file with `globals` package variables and `functions`
/// functions, each declaring `locals_per_fn` locals of mixed shapes.
///
/// Every third name breaks the convention so reports are never empty.
#[allow(dead_code)]
pub fn generate_go_source(globals: usize, functions: usize, locals_per_fn: usize) -> String {
    let mut source = String::new();
    writeln!(source, "package main\n").unwrap();
    writeln!(source, "type ItemStruct struct {{\n\tID   int\n\tTags []string\n}}\n").unwrap();

    writeln!(source, "var (").unwrap();
    for i in 0..globals {
        let prefix = if i % 3 == 0 { "g" } else { "G" };
        match i % 4 {
            0 => writeln!(source, "\t{prefix}Count{i} int").unwrap(),
            1 => writeln!(source, "\t{prefix}Items{i}Arr []ItemStruct").unwrap(),
            2 => writeln!(source, "\t{prefix}Index{i}Map = map[string]int{{}}").unwrap(),
            _ => writeln!(source, "\t{prefix}Events{i} = make(chan ItemStruct)").unwrap(),
        }
    }
    writeln!(source, ")\n").unwrap();

    for f in 0..functions {
        writeln!(source, "func Func{f}(pName string, count int) []ItemStruct {{").unwrap();
        for j in 0..locals_per_fn {
            let prefix = if j % 3 == 0 { "" } else { "l" };
            match j % 4 {
                0 => writeln!(source, "\t{prefix}val{j} := pName + \"{j}\"").unwrap(),
                1 => writeln!(source, "\t{prefix}List{j}Arr := []int{{count, {j}}}").unwrap(),
                2 => writeln!(source, "\tvar {prefix}Seen{j} map[string]bool").unwrap(),
                _ => writeln!(source, "\t{prefix}Item{j}Rec := ItemStruct{{ID: {j}}}").unwrap(),
            }
            if j % 4 == 2 {
                writeln!(source, "\t_ = {prefix}Seen{j}").unwrap();
            }
        }
        writeln!(source, "\treturn nil\n}}\n").unwrap();
    }
    source
}
