use modelgen::{Model, TypeDescriptor};

#[derive(Model)]
struct Audit {
    reviewer: String,
}

/// Flattened generic members get a `Model` bound on the impl.
#[derive(Model)]
#[model(crate = "modelgen")]
struct Envelope<T> {
    id: u64,
    #[model(flatten)]
    body: T,
}

fn main() {
    let envelope = Envelope {
        id: 7,
        body: Audit {
            reviewer: String::new(),
        },
    };
    let _ = (envelope.id, &envelope.body.reviewer);
    let _: modelgen::Result<TypeDescriptor> = TypeDescriptor::of::<Envelope<Audit>>();
}
