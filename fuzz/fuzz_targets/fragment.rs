#![no_main]

use jpoet::{JavaFile, RenderConfig};
use jpoet_syntax::{Arg, ClassName, CodeBlock, MethodSpec, PackageName, TypeSpec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    let Ok(format) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(list) = ClassName::new("java.util", "List") else {
        return;
    };
    let args = [Arg::lit("x"), Arg::string("s"), Arg::ty(list), Arg::name("n")];
    // Malformed templates must be rejected, never panic
    let Ok(block) = CodeBlock::of(format, args) else {
        return;
    };
    let Ok(method) = MethodSpec::method("run") else {
        return;
    };
    let Ok(spec) = TypeSpec::class("Fuzz") else {
        return;
    };
    let Ok(package) = PackageName::parse("fuzz") else {
        return;
    };
    let file = JavaFile::new(package, spec.add_method(method.with_code(block)));
    let _ = file.render(&RenderConfig::default());
});
