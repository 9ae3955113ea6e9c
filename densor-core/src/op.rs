/// Elementwise binary operators over two equally shaped tensors.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum BinaryOpType {
    Add,
    Div,
    Sub,
    Mul,
}

impl BinaryOpType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Div => "div",
            Self::Sub => "sub",
            Self::Mul => "multiply",
        }
    }

    pub fn as_closure(&self) -> impl Fn(f32, f32) -> f32 {
        match self {
            Self::Add => |x, y| x + y,
            Self::Div => |x, y| x / y,
            Self::Sub => |x, y| x - y,
            Self::Mul => |x, y| x * y,
        }
    }
}
