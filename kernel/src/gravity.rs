//! N-body Newtonian gravity: acceleration kernels and the standalone
//! velocity-Verlet solver.

use crate::model::LawCard;

/// Default Plummer softening length.
pub const DEFAULT_SOFTENING_LENGTH: f64 = 0.0;
/// Default body-count threshold above which the dense pairwise kernel is
/// preferred.
pub const DEFAULT_DENSE_THRESHOLD: usize = 64;
/// Default memory cap for the dense kernel's working set, in bytes.
pub const DEFAULT_DENSE_MEMORY_CAP_BYTES: u64 = 256 * 1024 * 1024;

/// Stateless, pairwise Newtonian gravity solver with two interchangeable
/// acceleration kernels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitySolver {
    pub softening_length: f64,
    pub vectorized: bool,
    pub dense_threshold: usize,
    pub dense_memory_cap_bytes: u64,
}

impl Default for GravitySolver {
    fn default() -> Self {
        Self {
            softening_length: DEFAULT_SOFTENING_LENGTH,
            vectorized: true,
            dense_threshold: DEFAULT_DENSE_THRESHOLD,
            dense_memory_cap_bytes: DEFAULT_DENSE_MEMORY_CAP_BYTES,
        }
    }
}

impl GravitySolver {
    /// Whether the dense pairwise kernel should be used for `n` bodies:
    /// vectorization enabled, `n >= dense_threshold`, and the estimated
    /// working set (`48 * n^2` bytes) fits under the configured cap.
    #[must_use]
    pub fn should_use_dense_kernel(&self, n: usize) -> bool {
        if !self.vectorized || n < self.dense_threshold {
            return false;
        }
        let n = n as u64;
        let estimated_bytes = 48_u64.saturating_mul(n).saturating_mul(n);
        estimated_bytes <= self.dense_memory_cap_bytes
    }

    /// Pure function of masses and positions: Newtonian gravitational
    /// acceleration on each body.
    ///
    /// `g` is the gravitational constant (the gravity card's `G`
    /// parameter, or `0.0` if absent — a missing solver is fatal, but a
    /// missing `G` is a silent fallback).
    #[must_use]
    pub fn accelerations(&self, g: f64, m: &[f64], r: &[[f64; 3]]) -> Vec<[f64; 3]> {
        let n = r.len();
        let eps2 = self.softening_length * self.softening_length;
        if self.should_use_dense_kernel(n) {
            dense_pairwise_kernel(g, m, r, eps2)
        } else {
            per_body_kernel(g, m, r, eps2)
        }
    }

    /// `accelerations`, reading `G` from `card.parameters["G"]`; absent
    /// `G` silently falls back to `0.0`.
    #[must_use]
    pub fn accelerations_for_card(&self, card: &LawCard, m: &[f64], r: &[[f64; 3]]) -> Vec<[f64; 3]> {
        let g = card.parameter_value("G").unwrap_or(0.0);
        self.accelerations(g, m, r)
    }

    /// Standalone velocity-Verlet step for gravity alone. The composed
    /// driver never calls this directly — it is kept as a correctness
    /// baseline for gravity-only scenarios.
    #[must_use]
    pub fn step(&self, card: &LawCard, m: &[f64], r: &[[f64; 3]], v: &[[f64; 3]], dt_seconds: f64) -> (Vec<[f64; 3]>, Vec<[f64; 3]>) {
        let a = self.accelerations_for_card(card, m, r);
        let v_half: Vec<[f64; 3]> = v.iter().zip(&a).map(|(vi, ai)| add(*vi, scale(*ai, 0.5 * dt_seconds))).collect();
        let r_new: Vec<[f64; 3]> = r.iter().zip(&v_half).map(|(ri, vi)| add(*ri, scale(*vi, dt_seconds))).collect();
        let a_new = self.accelerations_for_card(card, m, &r_new);
        let v_new: Vec<[f64; 3]> = v_half.iter().zip(&a_new).map(|(vi, ai)| add(*vi, scale(*ai, 0.5 * dt_seconds))).collect();
        (r_new, v_new)
    }
}

fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

/// For each `i`, accumulate `a_i = -G * sum_j m_j * (r_i - r_j) *
/// (|r_i - r_j|^2 + eps2)^(-3/2)`, with the self term forced to `+inf`
/// before the reciprocal so it contributes zero, avoiding a floating-point
/// singularity.
#[must_use]
pub fn per_body_kernel(g: f64, m: &[f64], r: &[[f64; 3]], eps2: f64) -> Vec<[f64; 3]> {
    let n = r.len();
    let mut a = vec![[0.0; 3]; n];
    for i in 0..n {
        let mut acc = [0.0; 3];
        for j in 0..n {
            let dx = r[i][0] - r[j][0];
            let dy = r[i][1] - r[j][1];
            let dz = r[i][2] - r[j][2];
            let dist2 = if i == j { f64::INFINITY } else { dx * dx + dy * dy + dz * dz + eps2 };
            let inv_r3 = dist2.powf(-1.5);
            let coeff = m[j] * inv_r3;
            acc[0] += dx * coeff;
            acc[1] += dy * coeff;
            acc[2] += dz * coeff;
        }
        a[i] = [-g * acc[0], -g * acc[1], -g * acc[2]];
    }
    a
}

/// Same result as [`per_body_kernel`] via the full `N x N x 3` difference
/// tensor. Mathematically identical to the per-body kernel; kept distinct
/// so the two can be benchmarked and validated against each other
/// independently.
#[must_use]
pub fn dense_pairwise_kernel(g: f64, m: &[f64], r: &[[f64; 3]], eps2: f64) -> Vec<[f64; 3]> {
    let n = r.len();
    let mut diff = vec![vec![[0.0_f64; 3]; n]; n];
    let mut inv_r3 = vec![vec![0.0_f64; n]; n];

    for i in 0..n {
        for j in 0..n {
            let dx = r[i][0] - r[j][0];
            let dy = r[i][1] - r[j][1];
            let dz = r[i][2] - r[j][2];
            diff[i][j] = [dx, dy, dz];
            let dist2 = if i == j { f64::INFINITY } else { dx * dx + dy * dy + dz * dz + eps2 };
            inv_r3[i][j] = dist2.powf(-1.5);
        }
    }

    let mut a = vec![[0.0; 3]; n];
    for i in 0..n {
        let mut acc = [0.0; 3];
        for j in 0..n {
            let coeff = m[j] * inv_r3[i][j];
            acc[0] += diff[i][j][0] * coeff;
            acc[1] += diff[i][j][1] * coeff;
            acc[2] += diff[i][j][2] * coeff;
        }
        a[i] = [-g * acc[0], -g * acc[1], -g * acc[2]];
    }
    a
}
