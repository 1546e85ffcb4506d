extern crate uniquemap;

use std::collections::hash_map::RandomState;
use std::hash::Hash;

use uniquemap::{bimap, BijectiveMap, Error};
use uuid::Uuid;

fn assert_bijection<K, V>(map: &BijectiveMap<K, V>)
where
    K: Eq + Hash + std::fmt::Debug,
    V: Eq + Hash + std::fmt::Debug,
{
    assert_eq!(map.keys().len(), map.count());
    assert_eq!(map.values().len(), map.count());
    for key in map.keys() {
        let value = map.get_by_key(key).unwrap();
        assert_eq!(map.get_by_value(value), Ok(key));
    }
}

#[test]
fn scenario() {
    let mut map = BijectiveMap::new();
    map.add("a", 1).unwrap();
    assert_eq!(map.count(), 1);
    assert_eq!(map.add("b", 1), Err(Error::DuplicateValue));
    assert_eq!(map.count(), 1);
    assert_eq!(map.add("a", 2), Err(Error::DuplicateKey));
    assert_eq!(map.count(), 1);
    map.add("b", 2).unwrap();
    assert_eq!(map.count(), 2);
    assert!(map.remove(&"a"));
    assert_eq!(map.count(), 1);
    assert_eq!(map.get_by_key(&"a"), Err(Error::KeyNotFound));
    assert_eq!(map.get_by_value(&1), Err(Error::ValueNotFound));
}

#[test]
fn round_trip() {
    let mut map = BijectiveMap::new();
    let key = Uuid::new_v4();
    map.add(key, "session").unwrap();
    assert_eq!(map.get_by_key(&key), Ok(&"session"));
    assert_eq!(map.get_by_value(&"session"), Ok(&key));
    assert_eq!(map.try_get_by_key(&key), Some(&"session"));
    assert_eq!(map.try_get_by_key(&Uuid::nil()), None);
}

#[test]
fn removal() {
    let mut map = BijectiveMap::new();
    assert!(!map.remove(&"missing"));
    assert_eq!(map.count(), 0);

    map.add("k", 'v').unwrap();
    map.add("j", 'w').unwrap();
    assert!(!map.remove(&"missing"));
    assert_eq!(map.count(), 2);

    assert!(map.remove(&"k"));
    assert_eq!(map.count(), 1);
    assert_eq!(map.get_by_key(&"k"), Err(Error::KeyNotFound));
    assert_eq!(map.get_by_value(&'v'), Err(Error::ValueNotFound));
    assert!(!map.contains_key(&"k"));
    assert!(!map.contains_value(&'v'));
    assert_bijection(&map);

    assert!(map.remove_by_value(&'w'));
    assert!(map.is_empty());
}

#[test]
fn invariant_holds_across_random_operations() {
    let mut map = BijectiveMap::new();
    let mut live = Vec::new();

    for i in 0..512u32 {
        let key = Uuid::new_v4();
        map.add(key, i).unwrap();
        live.push(key);

        // the uuid's own bytes decide what happens next
        let roll = key.as_bytes()[0];
        if roll % 3 == 0 {
            let victim = live.swap_remove(roll as usize % live.len());
            assert!(map.remove(&victim));
        } else if roll % 5 == 0 {
            let other = live[roll as usize % live.len()];
            assert_eq!(map.add(other, u32::MAX - i), Err(Error::DuplicateKey));
            assert_eq!(map.add(Uuid::new_v4(), i), Err(Error::DuplicateValue));
        }

        assert_eq!(map.count(), live.len());
        assert_bijection(&map);
    }

    for key in &live {
        assert!(map.contains_key(key));
    }
}

#[test]
fn build_from_pairs() {
    let map: BijectiveMap<_, _> = BijectiveMap::try_from_pairs((0..100).map(|n| (n, n.to_string()))).unwrap();
    assert_eq!(map.count(), 100);
    assert_eq!(map.get_by_value(&"42".to_string()), Ok(&42));
    assert_bijection(&map);

    let err = BijectiveMap::<_, _, RandomState>::try_from_pairs(vec![("x", 1), ("y", 2), ("z", 1)]);
    assert_eq!(err, Err(Error::DuplicateValue));
}

#[test]
fn macro_literal() {
    let map = bimap!{
        "red"   => 0xff0000,
        "green" => 0x00ff00,
        "blue"  => 0x0000ff,
    }.unwrap();
    assert_eq!(map.count(), 3);
    assert_eq!(map.get_by_value(&0x00ff00), Ok(&"green"));

    let empty: BijectiveMap<u8, u8> = bimap!{}.unwrap();
    assert!(empty.is_empty());

    assert_eq!(bimap!{ 1 => 'a', 1 => 'b' }.err(), Some(Error::DuplicateKey));
}

#[test]
fn errors_can_be_propagated() {
    fn lookup(map: &BijectiveMap<&'static str, u16>, name: &'static str) -> uniquemap::Result<u16> {
        Ok(*map.get_by_key(&name)?)
    }

    let map = bimap!{ "ssh" => 22 }.unwrap();
    assert_eq!(lookup(&map, "ssh"), Ok(22));
    assert_eq!(lookup(&map, "ftp"), Err(Error::KeyNotFound));

    let boxed: Box<dyn std::error::Error> = Box::new(Error::ValueNotFound);
    assert_eq!(boxed.to_string(), "the value was not found");
}

#[test]
fn custom_hasher() {
    #[derive(Clone, Default)]
    struct Fixed;

    impl std::hash::BuildHasher for Fixed {
        type Hasher = std::collections::hash_map::DefaultHasher;
        fn build_hasher(&self) -> Self::Hasher {
            std::collections::hash_map::DefaultHasher::new()
        }
    }

    let mut map = BijectiveMap::with_capacity_and_hasher(4, Fixed);
    map.add(1, 2).unwrap();
    map.add(2, 1).unwrap();
    assert_eq!(map.get_by_value(&1), Ok(&2));

    let mut other = BijectiveMap::new();
    other.add(2, 1).unwrap();
    other.add(1, 2).unwrap();
    assert!(map == other);
}
