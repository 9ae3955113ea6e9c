use densor_core::{Result, Tensor};

/// Build the demo transcript: a filled 2x3 matrix, one element read back,
/// then a sparsely set 2x2x2 tensor.
pub fn run() -> Result<String> {
    let mut out = String::from("Simple Tensor Demo (f32)\n");

    let mut t = Tensor::new(&[2, 3])?;
    out.push_str("Created tensor of shape [2, 3]. Filling values...\n");

    let mut val = 1.0;
    for i in 0..2 {
        for j in 0..3 {
            t.set(&[i, j], val)?;
            val += 1.0;
        }
    }

    out.push_str("Tensor contents:\n");
    out.push_str(&t.to_string());
    out.push_str(&format!("Element at (1,2) = {}\n", t.get(&[1, 2])?));

    let mut t3 = Tensor::new(&[2, 2, 2])?;
    out.push_str("\nCreated 3D tensor of shape [2, 2, 2]. Setting some values...\n");
    t3.set(&[0, 0, 0], 1.5)?;
    t3.set(&[1, 1, 1], 9.25)?;
    out.push_str(&t3.to_string());

    out.push_str("Done.\n");
    Ok(out)
}

fn main() -> Result<()> {
    print!("{}", run()?);
    Ok(())
}
