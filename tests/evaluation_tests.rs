mod common;

use rstest::rstest;

use chebfun::{
    bary,
    clenshaw,
    Chebtech2,
    EvaluationMethod
};

use common::{
    infnorm,
    linspace,
    scaled_tol,
    spread_points,
    testfunctions
};

#[test]
fn bary_empty_inputs() {
    let empty: Vec<f64> = Vec::new();
    let pts = spread_points(1001);
    assert!(bary(&empty, &empty, &empty, &empty).is_empty());
    assert!(bary(&vec![0.1], &empty, &empty, &empty).is_empty());
    assert!(bary(&empty, &[0.1], &[0.1], &[1.0]).is_empty());
    assert!(bary(&pts, &empty, &empty, &empty).is_empty());
    assert!(bary(&empty, &pts, &pts, &pts).is_empty());
    assert!(!bary(&vec![0.1], &[0.1], &[0.1], &[1.0]).is_empty());
}

#[test]
fn clenshaw_empty_inputs() {
    let empty: Vec<f64> = Vec::new();
    let pts = spread_points(1001);
    assert!(clenshaw(&empty, &empty).is_empty());
    assert!(clenshaw(&empty, &[1.0]).is_empty());
    assert!(clenshaw(&vec![1.0], &empty).is_empty());
    assert!(clenshaw(&pts, &empty).is_empty());
    assert!(clenshaw(&empty, &pts).is_empty());
    assert!(!clenshaw(&vec![0.1], &[0.1]).is_empty());
}

#[test]
fn scalar_points_give_scalars() {
    let xk = Chebtech2::chebpts(15);
    let vk = Chebtech2::barywts(15);
    let fk: Vec<f64> = spread_points(15);
    let ak: Vec<f64> = spread_points(11);

    for x in spread_points(9) {
        let fb: f64 = bary(&x, &fk, &xk, &vk);
        let fc: f64 = clenshaw(&x, &ak);
        assert!(fb.is_finite());
        assert!(fc.is_finite());
    }

    let xx = spread_points(9);
    assert_eq!(bary(&xx, &fk, &xk, &vk).len(), 9);
    assert_eq!(clenshaw(&xx[..], &ak).len(), 9);
}

#[test]
fn bary_hits_nodes_exactly() {
    let xk = Chebtech2::chebpts(15);
    let vk = Chebtech2::barywts(15);
    let fk = spread_points(15);
    let out = bary(&xk, &fk, &xk, &vk);
    assert_eq!(out, fk);
    assert!(out.iter().all(|v| v.is_finite()));
}

#[rstest]
#[case(5e-324)]
#[case(-5e-324)]
#[case(1e-320)]
fn bary_next_to_a_node_stays_finite(#[case] x: f64) {
    let xk = Chebtech2::chebpts(3);
    let vk = Chebtech2::barywts(3);
    let fb: f64 = bary(&x, &[1.0, 2.0, 3.0], &xk, &vk);
    assert_eq!(fb, 2.0);

    let tech = Chebtech2::initconst(1.0);
    let fb: f64 = tech.eval_bary(&x);
    let fc: f64 = tech.eval_clenshaw(&x);
    assert_eq!(fb, 1.0);
    assert_eq!(fc, 1.0);
}

#[test]
fn bary_without_weights_is_empty() {
    let empty: Vec<f64> = Vec::new();
    assert!(bary(&vec![0.1, 0.2], &[1.0, 2.0], &[0.0, 1.0], &empty).is_empty());
}

#[test]
fn methods_agree_on_every_shape() {
    let coeffs = spread_points(3);
    for n in 0..coeffs.len() {
        let tech = Chebtech2::initcoeffs(coeffs[..n].to_vec());

        let fb: f64 = tech.eval(&0.5_f64, EvaluationMethod::Barycentric);
        let fc: f64 = tech.eval(&0.5_f64, EvaluationMethod::Clenshaw);
        assert_eq!(fb.is_nan(), fc.is_nan());

        for pts in [vec![], vec![0.5], vec![0.5, 0.6]] {
            let fb = tech.eval_bary(&pts);
            let fc = tech.eval_clenshaw(&pts);
            assert_eq!(fb.len(), fc.len());
            assert!(infnorm(&fb, &fc) < 1e1 * common::EPS);
        }
    }
}

#[rstest]
fn bary_matches_sampled_function(
    #[values(0, 1, 2, 3)] fun_index: usize,
    #[values(100, 200)] nk: usize,
    #[values(100, 1000, 10000)] npts: usize,
) {
    let (name, fun) = testfunctions()[fun_index];
    let xk = Chebtech2::chebpts(nk);
    let vk = Chebtech2::barywts(nk);
    let fk: Vec<f64> = xk.iter().map(|&x| fun(x)).collect();

    let x = linspace(-1.0, 1.0, npts);
    let a = bary(&x, &fk, &xk, &vk);
    let b: Vec<f64> = x.iter().map(|&x| fun(x)).collect();

    let err = infnorm(&a, &b);
    assert!(err < scaled_tol(npts), "{}: bary error {:e} on {} nodes", name, err, nk);
}

#[rstest]
fn clenshaw_matches_sampled_function(
    #[values(0, 1, 2, 3)] fun_index: usize,
    #[values(100, 200)] nk: usize,
    #[values(100, 1000, 10000)] npts: usize,
) {
    let (name, fun) = testfunctions()[fun_index];
    let fk: Vec<f64> = Chebtech2::chebpts(nk).iter().map(|&x| fun(x)).collect();
    let ak = Chebtech2::vals2coeffs(&fk);

    let x = linspace(-1.0, 1.0, npts);
    let a = clenshaw(&x, &ak);
    let b: Vec<f64> = x.iter().map(|&x| fun(x)).collect();

    let err = infnorm(&a, &b);
    assert!(err < 2e1 * scaled_tol(npts), "{}: clenshaw error {:e} on {} coefficients", name, err, nk);
}
