//! Element-wise dictionary lookup over n-dimensional key arrays

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::error::{UtilError, UtilResult};

/// Map every key in `keys` through `dictionary`, keeping the array shape
///
/// Keys missing from the dictionary take `default` when one is given and
/// fail with [`UtilError::KeyNotFound`] otherwise. Each distinct key is looked
/// up once.
pub fn vectorized_dict_lookup<K, V, S, D>(
    dictionary: &HashMap<K, V>,
    keys: &ArrayBase<S, D>,
    default: Option<&V>,
) -> UtilResult<Array<V, D>>
where
    K: Eq + Hash + Debug,
    V: Clone,
    S: Data<Elem = K>,
    D: Dimension,
{
    let mut resolved: HashMap<&K, &V> = HashMap::new();
    let mut values = Vec::with_capacity(keys.len());

    for key in keys.iter() {
        let value = match resolved.get(key) {
            Some(&value) => value,
            None => {
                let value = dictionary
                    .get(key)
                    .or(default)
                    .ok_or_else(|| UtilError::KeyNotFound(format!("{:?}", key)))?;
                resolved.insert(key, value);
                value
            }
        };
        values.push(value.clone());
    }

    Ok(Array::from_shape_vec(keys.raw_dim(), values)?)
}
