use super::{Node, Value};

/// Renders as `Tag(payload, children...)`, e.g. `Sign(Minus, Number(5))`.
impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.tag().to_string();
        let mut tuple = f.debug_tuple(&name);

        match self.value() {
            Value::None => {}
            Value::Name(name) => {
                tuple.field(&Bare(name));
            }
            Value::Str(s) => {
                tuple.field(s);
            }
            Value::Int(v) => {
                tuple.field(v);
            }
            Value::Real(v) => {
                tuple.field(v);
            }
            Value::Op(op) => {
                tuple.field(op);
            }
        }

        for child in self.children() {
            tuple.field(&**child);
        }

        tuple.finish()
    }
}

/// Identifiers print without quotes, which keeps them apart from strings.
struct Bare<'a>(&'a str);

impl std::fmt::Debug for Bare<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
