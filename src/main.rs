use bigbase::{base58, BigUint};

fn main() {
    let n = BigUint::from_bytes(b"Hello world!");
    let encoded = base58().encode(&n, false);
    println!("{} -> {}", n.hex(), encoded);

    let decoded = base58().decode(&encoded, false).expect("just encoded");
    println!("{} -> {}", encoded, decoded.hex());
}
