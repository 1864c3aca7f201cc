#![feature(test)]

extern crate test;
use test::Bencher;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use ndarray_euler::{build_block, AngleSet};

fn angles(n: usize) -> AngleSet
{
    AngleSet::random_using(n, &mut SmallRng::seed_from_u64(n as u64)).unwrap()
}

#[bench]
fn to_matrix_8(bench: &mut Bencher)
{
    let a = angles(8);
    bench.iter(|| a.to_matrix());
}

#[bench]
fn to_matrix_64(bench: &mut Bencher)
{
    let a = angles(64);
    bench.iter(|| a.to_matrix());
}

#[bench]
fn from_matrix_8(bench: &mut Bencher)
{
    let q = angles(8).to_matrix();
    bench.iter(|| AngleSet::from_matrix(&q).unwrap());
}

#[bench]
fn from_matrix_64(bench: &mut Bencher)
{
    let q = angles(64).to_matrix();
    bench.iter(|| AngleSet::from_matrix(&q).unwrap());
}

#[bench]
fn build_block_64(bench: &mut Bencher)
{
    let a = angles(65);
    let mut chain = a.layers().next().unwrap().to_owned();
    chain[63] = std::f64::consts::FRAC_PI_2;
    bench.iter(|| build_block(&chain));
}
