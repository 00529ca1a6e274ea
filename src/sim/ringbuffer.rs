//! Fixed-capacity circular object pool
//!
//! All slots are built up front. Handing out an object just advances a
//! cursor, so the oldest object is recycled whether or not it is still in
//! use.

#[derive(Debug, Clone)]
pub struct Ringbuffer<T> {
    data: Vec<T>,
    pos: usize,
}

impl<T> Ringbuffer<T> {
    /// Fill `size` slots by calling `factory` once per slot, in order
    pub fn new(size: usize, mut factory: impl FnMut() -> T) -> Self {
        let data = (0..size).map(|_| factory()).collect();
        Self { data, pos: 0 }
    }

    /// Next object in round-robin order, or `None` for an empty pool
    pub fn get_next(&mut self) -> Option<&mut T> {
        if self.data.is_empty() {
            return None;
        }
        let idx = self.pos;
        self.pos = (self.pos + 1) % self.data.len();
        self.data.get_mut(idx)
    }

    /// Apply `f` to every slot in index order
    pub fn update(&mut self, f: impl FnMut(&mut T)) {
        self.data.iter_mut().for_each(f);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Index the next `get_next` will hand out
    pub fn cursor(&self) -> usize {
        self.pos
    }
}

impl<'a, T> IntoIterator for &'a Ringbuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Ringbuffer<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_factory_called_per_slot() {
        let mut counter = 0;
        let ring = Ringbuffer::new(4, || {
            counter += 1;
            counter
        });
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_get_next_wraps() {
        let mut ring = Ringbuffer::new(3, || 0u32);
        let mut idx = 0;
        ring.update(|v| {
            *v = idx;
            idx += 1;
        });

        let seen: Vec<u32> = (0..7).map(|_| *ring.get_next().unwrap()).collect();
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(ring.cursor(), 1);
    }

    #[test]
    fn test_recycled_object_keeps_state() {
        let mut ring = Ringbuffer::new(2, Vec::<u8>::new);
        ring.get_next().unwrap().push(1);
        ring.get_next().unwrap().push(2);
        // Third request hands back the first object as-is
        assert_eq!(ring.get_next().unwrap().as_slice(), &[1]);
    }

    #[test]
    fn test_empty_pool() {
        let mut ring: Ringbuffer<u8> = Ringbuffer::new(0, || 0);
        assert!(ring.is_empty());
        assert!(ring.get_next().is_none());
        ring.update(|_| panic!("no slots to visit"));
    }

    proptest! {
        #[test]
        fn prop_cursor_is_count_mod_size(size in 1usize..32, takes in 0usize..200) {
            let mut ring = Ringbuffer::new(size, || ());
            for _ in 0..takes {
                prop_assert!(ring.get_next().is_some());
            }
            prop_assert_eq!(ring.cursor(), takes % size);
            prop_assert_eq!(ring.len(), size);
        }
    }
}
