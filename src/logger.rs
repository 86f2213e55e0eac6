/// log4rs is configured from `log4rs.yaml` in the working directory before
/// main runs.
#[ctor::ctor]
fn init() {
    log4rs::init_file("log4rs.yaml", Default::default()).unwrap();
}
