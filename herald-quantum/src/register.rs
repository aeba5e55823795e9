//! Registro de qubits em vetor de estado denso
//!
//! O qubit na posição `k` de `slots` corresponde ao bit `k` do índice
//! da base computacional. Alocar um qubit dobra o vetor (novo bit mais
//! significativo em |0⟩); remover um qubit já medido o compacta.

use num_complex::Complex64;
use rand::Rng;

use crate::error::{QuantumError, QuantumResult};
use crate::gates::{Matrix2x2, Matrix4x4};

/// Tolerância numérica para probabilidades
pub const EPSILON: f64 = 1e-12;

/// Registro de qubits
#[derive(Debug, Clone)]
pub struct QubitRegister {
    /// Amplitudes, 2^n entradas
    amplitudes: Vec<Complex64>,
    /// IDs dos qubits por posição de bit
    slots: Vec<u64>,
    /// Próximo ID
    next_id: u64,
}

impl Default for QubitRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl QubitRegister {
    /// Cria registro vazio (estado escalar 1)
    pub fn new() -> Self {
        Self {
            amplitudes: vec![Complex64::new(1.0, 0.0)],
            slots: Vec::new(),
            next_id: 0,
        }
    }

    /// Número de qubits vivos
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Norma ao quadrado do vetor
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Aloca novo qubit em |0⟩ e devolve seu ID
    pub fn alloc(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let len = self.amplitudes.len();
        self.amplitudes.resize(len * 2, Complex64::new(0.0, 0.0));
        self.slots.push(id);
        id
    }

    fn position(&self, id: u64) -> QuantumResult<usize> {
        self.slots
            .iter()
            .position(|&q| q == id)
            .ok_or(QuantumError::UnknownQubit(id))
    }

    /// Verifica se o qubit existe
    pub fn contains(&self, id: u64) -> bool {
        self.slots.contains(&id)
    }

    /// Aplica gate single-qubit
    pub fn apply_single(&mut self, id: u64, gate: &Matrix2x2) -> QuantumResult<()> {
        let mask = 1usize << self.position(id)?;

        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let [a0, a1] = gate.apply([self.amplitudes[i], self.amplitudes[j]]);
                self.amplitudes[i] = a0;
                self.amplitudes[j] = a1;
            }
        }
        Ok(())
    }

    /// CNOT(control → target)
    pub fn apply_cnot(&mut self, control: u64, target: u64) -> QuantumResult<()> {
        if control == target {
            return Err(QuantumError::DuplicateQubit(control));
        }
        let c_mask = 1usize << self.position(control)?;
        let t_mask = 1usize << self.position(target)?;

        for i in 0..self.amplitudes.len() {
            if i & c_mask != 0 && i & t_mask == 0 {
                self.amplitudes.swap(i, i | t_mask);
            }
        }
        Ok(())
    }

    /// Aplica operador 4x4 sobre (q0, q1); índice local = 2·bit(q0) + bit(q1)
    pub fn apply_two(&mut self, q0: u64, q1: u64, op: &Matrix4x4) -> QuantumResult<()> {
        if q0 == q1 {
            return Err(QuantumError::DuplicateQubit(q0));
        }
        let m0 = 1usize << self.position(q0)?;
        let m1 = 1usize << self.position(q1)?;

        for i in 0..self.amplitudes.len() {
            if i & (m0 | m1) == 0 {
                let idx = [i, i | m1, i | m0, i | m0 | m1];
                let v = idx.map(|k| self.amplitudes[k]);
                let out = op.apply(v);
                for (k, amp) in idx.into_iter().zip(out) {
                    self.amplitudes[k] = amp;
                }
            }
        }
        Ok(())
    }

    /// Probabilidade de medir 1
    pub fn probability_one(&self, id: u64) -> QuantumResult<f64> {
        let mask = 1usize << self.position(id)?;
        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum())
    }

    /// Projeta o qubit em `value` e renormaliza; devolve a probabilidade do ramo
    pub fn project(&mut self, id: u64, value: u8) -> QuantumResult<f64> {
        if value > 1 {
            return Err(QuantumError::InvalidValue(value));
        }
        let mask = 1usize << self.position(id)?;
        let keep = if value == 1 { mask } else { 0 };

        let p1 = self.probability_one(id)?;
        let p = if value == 1 { p1 } else { 1.0 - p1 };
        if p < EPSILON {
            return Err(QuantumError::ZeroProbability);
        }

        let scale = 1.0 / p.sqrt();
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if i & mask == keep {
                *amp *= scale;
            } else {
                *amp = Complex64::new(0.0, 0.0);
            }
        }
        Ok(p)
    }

    /// Medição projetiva na base computacional
    pub fn measure<R: Rng + ?Sized>(&mut self, id: u64, rng: &mut R) -> QuantumResult<u8> {
        let p1 = self.probability_one(id)?.clamp(0.0, 1.0);
        let value = u8::from(rng.gen_bool(p1));
        self.project(id, value)?;
        Ok(value)
    }

    /// Remove um qubit que está em estado definido `value`
    pub fn remove(&mut self, id: u64, value: u8) -> QuantumResult<()> {
        if value > 1 {
            return Err(QuantumError::InvalidValue(value));
        }
        let k = self.position(id)?;
        let low_mask = (1usize << k) - 1;
        let half = self.amplitudes.len() / 2;

        let compact: Vec<Complex64> = (0..half)
            .map(|j| {
                let low = j & low_mask;
                let high = (j >> k) << (k + 1);
                self.amplitudes[high | ((value as usize) << k) | low]
            })
            .collect();

        self.amplitudes = compact;
        self.slots.remove(k);
        Ok(())
    }

    /// Mede e remove o qubit
    pub fn discard<R: Rng + ?Sized>(&mut self, id: u64, rng: &mut R) -> QuantumResult<u8> {
        let value = self.measure(id, rng)?;
        self.remove(id, value)?;
        Ok(value)
    }

    /// Medição generalizada sobre (q0, q1).
    ///
    /// Cada ramo é `(rótulo, Kraus)`; vários ramos podem compartilhar o rótulo.
    /// Devolve o rótulo sorteado e deixa o estado no ramo correspondente.
    pub fn gmeasure<R: Rng + ?Sized>(
        &mut self,
        q0: u64,
        q1: u64,
        branches: &[(u8, Matrix4x4)],
        rng: &mut R,
    ) -> QuantumResult<u8> {
        let mut candidates = Vec::with_capacity(branches.len());
        for (label, kraus) in branches {
            let mut next = self.clone();
            next.apply_two(q0, q1, kraus)?;
            let p = next.norm_sqr();
            candidates.push((*label, p, next));
        }

        let total: f64 = candidates.iter().map(|(_, p, _)| p).sum();
        let mut draw = rng.gen_range(0.0..total.max(EPSILON));

        let mut chosen = None;
        for (label, p, next) in candidates {
            if p < EPSILON {
                continue;
            }
            let hit = draw < p;
            chosen = Some((label, p, next));
            if hit {
                break;
            }
            draw -= p;
        }

        let (label, p, next) = chosen.ok_or(QuantumError::ZeroProbability)?;
        let scale = 1.0 / p.sqrt();
        self.amplitudes = next.amplitudes.into_iter().map(|a| a * scale).collect();
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{Hadamard, PauliX, QuantumGate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_alloc_and_remove() {
        let mut reg = QubitRegister::new();
        let a = reg.alloc();
        let b = reg.alloc();
        assert_eq!(reg.len(), 2);

        reg.apply_single(b, &PauliX.matrix()).unwrap();
        reg.remove(a, 0).unwrap();
        assert_eq!(reg.len(), 1);
        assert!((reg.probability_one(b).unwrap() - 1.0).abs() < EPSILON);
        assert!(!reg.contains(a));
    }

    #[test]
    fn test_bell_pair_correlations() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut reg = QubitRegister::new();
            let a = reg.alloc();
            let b = reg.alloc();
            reg.apply_single(a, &Hadamard.matrix()).unwrap();
            reg.apply_cnot(a, b).unwrap();

            let ma = reg.discard(a, &mut rng).unwrap();
            let mb = reg.discard(b, &mut rng).unwrap();
            assert_eq!(ma, mb);
            assert!(reg.is_empty());
        }
    }

    #[test]
    fn test_project_zero_probability() {
        let mut reg = QubitRegister::new();
        let a = reg.alloc();
        assert_eq!(reg.project(a, 1), Err(QuantumError::ZeroProbability));
        assert!((reg.project(a, 0).unwrap() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_unknown_and_duplicate_qubits() {
        let mut reg = QubitRegister::new();
        let a = reg.alloc();
        assert_eq!(reg.apply_cnot(a, a), Err(QuantumError::DuplicateQubit(a)));
        assert_eq!(reg.probability_one(99), Err(QuantumError::UnknownQubit(99)));
    }

    #[test]
    fn test_remove_middle_qubit_keeps_others() {
        let mut reg = QubitRegister::new();
        let a = reg.alloc();
        let b = reg.alloc();
        let c = reg.alloc();
        reg.apply_single(a, &PauliX.matrix()).unwrap();
        reg.apply_single(c, &PauliX.matrix()).unwrap();

        reg.remove(b, 0).unwrap();
        assert!((reg.probability_one(a).unwrap() - 1.0).abs() < EPSILON);
        assert!((reg.probability_one(c).unwrap() - 1.0).abs() < EPSILON);
        assert!((reg.norm_sqr() - 1.0).abs() < EPSILON);
    }
}
