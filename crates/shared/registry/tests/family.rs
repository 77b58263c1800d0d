use smenum_registry::{Enumerator, RegistryError, VariantKey};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Enumerator)]
enum Tier {
    #[enumerator(code = 1)]
    Bronze,
    #[enumerator(code = 2)]
    Silver,
    #[enumerator(code = 3, name = "Gold Plus")]
    Gold,
}

#[derive(Debug, Clone, Copy, Enumerator)]
enum Region {
    #[enumerator(code = 1)]
    North,
    #[enumerator(code = 2)]
    South,
}

#[test]
fn variants_are_discovered_in_declaration_order() {
    assert_eq!(Tier::VARIANTS, &[Tier::Bronze, Tier::Silver, Tier::Gold]);
    assert_eq!(Tier::variants().len(), 3);
    assert_eq!(Tier::registry().len(), 3);
    assert!(Tier::registry().family().ends_with("Tier"));
}

#[test]
fn lookups_resolve_declared_variants() {
    for &tier in Tier::VARIANTS {
        assert_eq!(Tier::from_code(tier.code()), Some(tier));
        assert_eq!(Tier::from_name(tier.name()), Some(tier));
        assert_eq!(Tier::from_name(&tier.to_string()), Some(tier));
    }

    assert_eq!(Tier::Gold.to_string(), "Gold Plus");
    assert_eq!(Tier::from_name("Gold"), None);
    assert_eq!(Tier::from_code(0), None);
}

#[test]
fn std_conversions_use_registry_errors() {
    assert_eq!(Tier::try_from(2), Ok(Tier::Silver));
    assert_eq!("Bronze".parse::<Tier>(), Ok(Tier::Bronze));

    assert!(matches!(Tier::try_from(9), Err(RegistryError::UnknownCode { code: 9, .. })));
    assert!(matches!("bronze".parse::<Tier>(), Err(RegistryError::UnknownName { .. })));
}

#[test]
fn variants_work_as_map_keys() {
    let mut counts: HashMap<Tier, u32> = HashMap::new();
    for tier in [Tier::Bronze, Tier::Gold, Tier::Bronze] {
        *counts.entry(tier).or_default() += 1;
    }

    assert_eq!(counts[&Tier::Bronze], 2);
    assert_eq!(counts[&Tier::Gold], 1);
    assert!(!counts.contains_key(&Tier::Silver));
}

#[test]
fn keys_never_match_across_families() {
    // Same code, different family.
    assert_eq!(Tier::Bronze.code(), Region::North.code());
    assert_ne!(Tier::Bronze.key(), Region::North.key());

    assert_eq!(Tier::Bronze.key(), Tier::Bronze.key());
    assert_eq!(Tier::Bronze.key().to_string(), "Bronze");

    let keys: HashSet<VariantKey> =
        [Tier::Bronze.key(), Region::North.key(), Tier::Bronze.key()].into_iter().collect();
    assert_eq!(keys.len(), 2);
}

#[test]
fn keys_downcast_to_their_own_family_only() {
    let key = Region::South.key();

    assert!(key.is::<Region>());
    assert!(!key.is::<Tier>());
    assert_eq!(key.downcast::<Region>(), Some(Region::South));
    assert_eq!(key.downcast::<Tier>(), None);
    assert_eq!(key.code(), 2);
    assert_eq!(key.name(), "South");
    assert!(key.family().ends_with("Region"));
}

#[test]
fn registry_is_built_once_across_threads() {
    let addresses: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| std::ptr::from_ref(Tier::registry()) as usize))
            .collect();
        handles.into_iter().map(|h| h.join().expect("lookup thread panicked")).collect()
    });

    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}
