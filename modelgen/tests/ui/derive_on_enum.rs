use modelgen::Model;

#[derive(Model)]
enum Status {
    Active,
}

fn main() {
    let _ = Status::Active;
}
