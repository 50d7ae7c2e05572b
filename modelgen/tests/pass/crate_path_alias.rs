use modelgen as mg;
use mg::{Model, TypeDescriptor};

/// Generated code reaches the runtime through `mg::` when the dependency is
/// renamed.
#[derive(Model)]
#[model(crate = "mg")]
struct AliasedCert {
    #[model(persist = "comment:证书名称")]
    name: String,
    expire_time: Option<std::time::SystemTime>,
}

fn main() {
    let cert = AliasedCert {
        name: String::new(),
        expire_time: None,
    };
    let _ = (&cert.name, cert.expire_time);
    let _: mg::Result<TypeDescriptor> = TypeDescriptor::build(&cert);
}
