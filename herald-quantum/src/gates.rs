//! # Quantum Gates — Portas usadas pelo protocolo
//!
//! ## Gates Implementadas
//!
//! - **Single-qubit**: I, H (Hadamard), X, Y, Z (Pauli)
//! - **Rotation**: Ry (preparação do estado brilhante)
//! - **Two-mode**: operadores de Kraus 4x4 do divisor de feixe

use herald_core::CorrectionOperator;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex64; 2]; 2],
}

impl Matrix2x2 {
    /// Cria matriz identidade
    pub fn identity() -> Self {
        Self {
            elements: [[ONE, ZERO], [ZERO, ONE]],
        }
    }

    /// Aplica gate a um estado [alpha, beta]
    pub fn apply(&self, state: [Complex64; 2]) -> [Complex64; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;
        [a * alpha + b * beta, c * alpha + d * beta]
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;
        Matrix2x2 {
            elements: [
                [a * e + b * g, a * f + b * h],
                [c * e + d * g, c * f + d * h],
            ],
        }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2 {
            elements: [[a.conj(), c.conj()], [b.conj(), d.conj()]],
        }
    }
}

/// Trait para portas quânticas
pub trait QuantumGate {
    /// Nome da porta
    fn name(&self) -> &'static str;

    /// Matriz da porta
    fn matrix(&self) -> Matrix2x2;

    /// Verifica se é unitária
    fn is_unitary(&self) -> bool {
        let m = self.matrix();
        let product = m.mul(&m.dagger());
        let [[a, b], [c, d]] = product.elements;
        (a - ONE).norm() < 1e-10 && b.norm() < 1e-10 && c.norm() < 1e-10 && (d - ONE).norm() < 1e-10
    }
}

/// Porta identidade
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl QuantumGate for Identity {
    fn name(&self) -> &'static str {
        "I"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2::identity()
    }
}

/// Porta Hadamard
#[derive(Clone, Copy, Debug, Default)]
pub struct Hadamard;

impl QuantumGate for Hadamard {
    fn name(&self) -> &'static str {
        "H"
    }

    fn matrix(&self) -> Matrix2x2 {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        Matrix2x2 {
            elements: [[h, h], [h, -h]],
        }
    }
}

/// Porta Pauli-X (bit flip)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliX;

impl QuantumGate for PauliX {
    fn name(&self) -> &'static str {
        "X"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2 {
            elements: [[ZERO, ONE], [ONE, ZERO]],
        }
    }
}

/// Porta Pauli-Y
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliY;

impl QuantumGate for PauliY {
    fn name(&self) -> &'static str {
        "Y"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2 {
            elements: [
                [ZERO, Complex64::new(0.0, -1.0)],
                [Complex64::new(0.0, 1.0), ZERO],
            ],
        }
    }
}

/// Porta Pauli-Z (phase flip)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliZ;

impl QuantumGate for PauliZ {
    fn name(&self) -> &'static str {
        "Z"
    }

    fn matrix(&self) -> Matrix2x2 {
        Matrix2x2 {
            elements: [[ONE, ZERO], [ZERO, -ONE]],
        }
    }
}

/// Porta de rotação em Y
#[derive(Clone, Copy, Debug)]
pub struct RotationY {
    pub theta: f64,
}

impl RotationY {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Rotação que leva |0⟩ para √(1-α)|0⟩ + √α|1⟩
    pub fn bright_state(alpha: f64) -> Self {
        Self::new(2.0 * alpha.sqrt().asin())
    }
}

impl QuantumGate for RotationY {
    fn name(&self) -> &'static str {
        "Ry"
    }

    fn matrix(&self) -> Matrix2x2 {
        let c = Complex64::new((self.theta / 2.0).cos(), 0.0);
        let s = Complex64::new((self.theta / 2.0).sin(), 0.0);
        Matrix2x2 {
            elements: [[c, -s], [s, c]],
        }
    }
}

/// Matriz do operador de correção
pub fn correction_matrix(op: CorrectionOperator) -> Matrix2x2 {
    match op {
        CorrectionOperator::Identity => Identity.matrix(),
        CorrectionOperator::PauliX => PauliX.matrix(),
        CorrectionOperator::PauliY => PauliY.matrix(),
        CorrectionOperator::PauliZ => PauliZ.matrix(),
    }
}

/// Matriz 4x4 sobre dois qubits, base |q0 q1⟩ = [00, 01, 10, 11]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4x4 {
    pub elements: [[Complex64; 4]; 4],
}

impl Matrix4x4 {
    pub fn zero() -> Self {
        Self {
            elements: [[ZERO; 4]; 4],
        }
    }

    /// Projetor |v⟩⟨v| de um vetor de dois qubits
    pub fn projector(v: [Complex64; 4]) -> Self {
        let mut m = Self::zero();
        for (i, row) in m.elements.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = v[i] * v[j].conj();
            }
        }
        m
    }

    /// Multiplica todos os elementos por um escalar real
    pub fn scale(mut self, s: f64) -> Self {
        for row in self.elements.iter_mut() {
            for cell in row.iter_mut() {
                *cell *= s;
            }
        }
        self
    }

    /// Aplica a um vetor de quatro amplitudes
    pub fn apply(&self, v: [Complex64; 4]) -> [Complex64; 4] {
        let mut out = [ZERO; 4];
        for (i, row) in self.elements.iter().enumerate() {
            out[i] = row.iter().zip(v.iter()).map(|(m, x)| m * x).sum();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gates_are_unitary() {
        assert!(Identity.is_unitary());
        assert!(Hadamard.is_unitary());
        assert!(PauliX.is_unitary());
        assert!(PauliY.is_unitary());
        assert!(PauliZ.is_unitary());
        assert!(RotationY::bright_state(0.3).is_unitary());
    }

    #[test]
    fn test_bright_state_amplitudes() {
        let alpha = 0.2;
        let [a0, a1] = RotationY::bright_state(alpha).matrix().apply([ONE, ZERO]);
        assert!((a0.norm_sqr() - (1.0 - alpha)).abs() < 1e-12);
        assert!((a1.norm_sqr() - alpha).abs() < 1e-12);
    }

    #[test]
    fn test_hadamard_squared_is_identity() {
        let h = Hadamard.matrix();
        let hh = h.mul(&h);
        let [[a, b], [c, d]] = hh.elements;
        assert!((a - ONE).norm() < 1e-12 && (d - ONE).norm() < 1e-12);
        assert!(b.norm() < 1e-12 && c.norm() < 1e-12);
    }

    #[test]
    fn test_projector_is_idempotent_on_its_vector() {
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        let v = [ZERO, h, h, ZERO];
        let out = Matrix4x4::projector(v).apply(v);
        for (x, y) in out.iter().zip(v.iter()) {
            assert!((x - y).norm() < 1e-12);
        }
    }
}
