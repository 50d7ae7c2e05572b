use modelgen::Model;

#[derive(Model)]
struct Cert {
    #[model(kind = "integer")]
    id: i64,
}

fn main() {
    let cert = Cert { id: 1 };
    let _ = cert.id;
}
