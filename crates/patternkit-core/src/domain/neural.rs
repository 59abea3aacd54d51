//! Neurons and layers connected through one operation.
//!
//! A single neuron behaves like a one-element collection, so
//! [`Network::connect`] works for neuron→neuron, neuron→layer,
//! layer→neuron and layer→layer alike.
//!
//! Neurons live in the [`Network`] arena; links are [`NeuronId`] indices and
//! never own the neuron they point at.

/// Handle to a neuron inside a [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeuronId(usize);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neuron {
    inputs: Vec<NeuronId>,
    outputs: Vec<NeuronId>,
}

impl Neuron {
    pub fn inputs(&self) -> &[NeuronId] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[NeuronId] {
        &self.outputs
    }
}

/// Anything that can stand on either side of a connection.
pub trait Connectable {
    fn neuron_ids(&self) -> Vec<NeuronId>;
}

impl Connectable for NeuronId {
    fn neuron_ids(&self) -> Vec<NeuronId> {
        vec![*self]
    }
}

/// An ordered group of neurons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeuronLayer {
    members: Vec<NeuronId>,
}

impl NeuronLayer {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[NeuronId] {
        &self.members
    }
}

impl Connectable for NeuronLayer {
    fn neuron_ids(&self) -> Vec<NeuronId> {
        self.members.clone()
    }
}

/// Owns every neuron.
#[derive(Debug, Clone, Default)]
pub struct Network {
    neurons: Vec<Neuron>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_neuron(&mut self) -> NeuronId {
        self.neurons.push(Neuron::default());
        NeuronId(self.neurons.len() - 1)
    }

    pub fn add_layer(&mut self, size: usize) -> NeuronLayer {
        NeuronLayer {
            members: (0..size).map(|_| self.add_neuron()).collect(),
        }
    }

    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Link every neuron of `from` to every neuron of `to`.
    ///
    /// Returns the number of links created. Ids from another network are
    /// skipped.
    pub fn connect(&mut self, from: &dyn Connectable, to: &dyn Connectable) -> usize {
        let targets = to.neuron_ids();
        let mut created = 0;
        for source in from.neuron_ids() {
            for &target in &targets {
                if source.0 >= self.neurons.len() || target.0 >= self.neurons.len() {
                    continue;
                }
                self.neurons[source.0].outputs.push(target);
                self.neurons[target.0].inputs.push(source);
                created += 1;
            }
        }
        created
    }

    /// Total number of links in the network.
    pub fn link_count(&self) -> usize {
        self.neurons.iter().map(|n| n.outputs.len()).sum()
    }
}
