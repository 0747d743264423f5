use std::sync::LazyLock;

use tracing::debug;

use super::{KnownValue, KnownValuesStore};

/// Declares a `KnownValue` constant along with its raw `u64` codepoint.
///
/// `const_known_value!(1000, MY_VALUE, "myValue")` expands to
/// `pub const MY_VALUE_RAW: u64 = 1000;` and
/// `pub const MY_VALUE: KnownValue` named `"myValue"`.
///
/// ```
/// use known_value_registry::const_known_value;
///
/// const_known_value!(1000, MY_CUSTOM_VALUE, "myCustomValue");
///
/// assert_eq!(MY_CUSTOM_VALUE_RAW, 1000);
/// assert_eq!(MY_CUSTOM_VALUE.value(), 1000);
/// assert_eq!(MY_CUSTOM_VALUE.name(), "myCustomValue");
/// ```
#[macro_export]
macro_rules! const_known_value {
    ($value:expr, $const_name:ident, $name:expr) => {
        $crate::__private::paste! {
            pub const [<$const_name _RAW>]: u64 = $value;
        }
        pub const $const_name: $crate::KnownValue =
            $crate::KnownValue::new_with_static_name($value, $name);
    };
}

// For definitions see: https://github.com/BlockchainCommons/Research/blob/master/papers/bcr-2023-002-known-value.md#appendix-a-registry

//
// General
//

// 0 *unassigned*
const_known_value!(1, IS_A, "isA");
const_known_value!(2, ID, "id");
const_known_value!(3, SIGNED, "signed");
const_known_value!(4, NOTE, "note");
const_known_value!(5, HAS_RECIPIENT, "hasRecipient");
const_known_value!(6, SSKR_SHARE, "sskrShare");
const_known_value!(7, CONTROLLER, "controller");
const_known_value!(8, KEY, "key");
const_known_value!(9, DEREFERENCE_VIA, "dereferenceVia");
const_known_value!(10, ENTITY, "entity");
const_known_value!(11, NAME, "name");
const_known_value!(12, LANGUAGE, "language");
const_known_value!(13, ISSUER, "issuer");
const_known_value!(14, HOLDER, "holder");
const_known_value!(15, SALT, "salt");
const_known_value!(16, DATE, "date");
const_known_value!(17, UNKNOWN_VALUE, "Unknown");
const_known_value!(18, VERSION_VALUE, "version");
const_known_value!(19, HAS_SECRET, "hasSecret");
const_known_value!(20, DIFF_EDITS, "edits");
const_known_value!(21, VALID_FROM, "validFrom");
const_known_value!(22, VALID_UNTIL, "validUntil");
// 23-49 *unassigned*

//
// Attachments
//

const_known_value!(50, ATTACHMENT, "attachment");
const_known_value!(51, VENDOR, "vendor");
const_known_value!(52, CONFORMS_TO, "conformsTo");
// 53-59 *unassigned*

//
// XID Documents
//

const_known_value!(60, ALLOW, "allow");
const_known_value!(61, DENY, "deny");
const_known_value!(62, ENDPOINT, "endpoint");
const_known_value!(63, DELEGATE, "delegate");
const_known_value!(64, PROVENANCE, "provenance");
const_known_value!(65, PRIVATE_KEY, "privateKey");
const_known_value!(66, SERVICE, "service");
const_known_value!(67, CAPABILITY, "capability");
// 68-69 *unassigned*

//
// XID Privileges
//

const_known_value!(70, PRIVILEGE_ALL, "All");
const_known_value!(71, PRIVILEGE_AUTH, "Auth");
const_known_value!(72, PRIVILEGE_SIGN, "Sign");
const_known_value!(73, PRIVILEGE_ENCRYPT, "Encrypt");
const_known_value!(74, PRIVILEGE_ELIDE, "Elide");
const_known_value!(75, PRIVILEGE_ISSUE, "Issue");
const_known_value!(76, PRIVILEGE_ACCESS, "Access");
// 77-79 *unassigned*
const_known_value!(80, PRIVILEGE_DELEGATE, "Delegate");
const_known_value!(81, PRIVILEGE_VERIFY, "Verify");
const_known_value!(82, PRIVILEGE_UPDATE, "Update");
const_known_value!(83, PRIVILEGE_TRANSFER, "Transfer");
const_known_value!(84, PRIVILEGE_ELECT, "Elect");
const_known_value!(85, PRIVILEGE_BURN, "Burn");
const_known_value!(86, PRIVILEGE_REVOKE, "Revoke");
// 87-99 *unassigned*

//
// Expression and Function Calls
//

const_known_value!(100, BODY, "body");
const_known_value!(101, RESULT, "result");
const_known_value!(102, ERROR, "error");
const_known_value!(103, OK_VALUE, "OK");
const_known_value!(104, PROCESSING_VALUE, "Processing");
const_known_value!(105, SENDER, "sender");
const_known_value!(106, SENDER_CONTINUATION, "senderContinuation");
const_known_value!(107, RECIPIENT_CONTINUATION, "recipientContinuation");
const_known_value!(108, CONTENT, "content");
// 109-199 *unassigned*

//
// Cryptography
//

const_known_value!(200, SEED_TYPE, "Seed");
const_known_value!(201, PRIVATE_KEY_TYPE, "PrivateKey");
const_known_value!(202, PUBLIC_KEY_TYPE, "PublicKey");
const_known_value!(203, MASTER_KEY_TYPE, "MasterKey");
// 204-299 *unassigned*

//
// Cryptocurrency Assets
//

const_known_value!(300, ASSET, "asset");
const_known_value!(301, BITCOIN_VALUE, "BTC");
const_known_value!(302, ETHEREUM_VALUE, "ETH");
const_known_value!(303, TEZOS_VALUE, "XTZ");
// 304-399 *unassigned*

//
// Cryptocurrency Networks
//

const_known_value!(400, NETWORK, "network");
const_known_value!(401, MAIN_NET_VALUE, "MainNet");
const_known_value!(402, TEST_NET_VALUE, "TestNet");
// 403-499 *unassigned*

//
// Bitcoin
//

const_known_value!(500, BIP32_KEY_TYPE, "BIP32Key");
const_known_value!(501, CHAIN_CODE, "chainCode");
const_known_value!(502, DERIVATION_PATH_TYPE, "DerivationPath");
const_known_value!(503, PARENT_PATH, "parent");
const_known_value!(504, CHILDREN_PATH, "children");
const_known_value!(505, PARENT_FINGERPRINT, "parentFingerprint");
const_known_value!(506, PSBT_TYPE, "PSBT");
const_known_value!(507, OUTPUT_DESCRIPTOR_TYPE, "OutputDescriptor");
const_known_value!(508, OUTPUT_DESCRIPTOR, "outputDescriptor");
// 509-599 *unassigned*

//
// Graphs
//

const_known_value!(600, GRAPH, "graph");
const_known_value!(601, SOURCE_TARGET_GRAPH, "SourceTargetGraph");
const_known_value!(602, PARENT_CHILD_GRAPH, "ParentChildGraph");
const_known_value!(603, DIGRAPH, "Digraph");
const_known_value!(604, ACYCLIC_GRAPH, "AcyclicGraph");
const_known_value!(605, MULTIGRAPH, "Multigraph");
const_known_value!(606, PSEUDOGRAPH, "Pseudograph");
const_known_value!(607, GRAPH_FRAGMENT, "GraphFragment");
const_known_value!(608, DAG, "DAG");
const_known_value!(609, TREE, "Tree");
const_known_value!(610, FOREST, "Forest");
const_known_value!(611, COMPOUND_GRAPH, "CompoundGraph");
const_known_value!(612, HYPERGRAPH, "Hypergraph");
const_known_value!(613, DIHYPERGRAPH, "Dihypergraph");
// 614-699 *unassigned*
const_known_value!(700, NODE, "node");
const_known_value!(701, EDGE, "edge");
const_known_value!(702, SOURCE, "source");
const_known_value!(703, TARGET, "target");
const_known_value!(704, PARENT, "parent");
const_known_value!(705, CHILD, "child");
// 706-... *unassigned*

/// Every standard Known Value, in codepoint order.
///
/// This is the complete contents of [`KNOWN_VALUES`].
pub static STANDARD_KNOWN_VALUES: &[KnownValue] = &[
    IS_A,
    ID,
    SIGNED,
    NOTE,
    HAS_RECIPIENT,
    SSKR_SHARE,
    CONTROLLER,
    KEY,
    DEREFERENCE_VIA,
    ENTITY,
    NAME,
    LANGUAGE,
    ISSUER,
    HOLDER,
    SALT,
    DATE,
    UNKNOWN_VALUE,
    VERSION_VALUE,
    HAS_SECRET,
    DIFF_EDITS,
    VALID_FROM,
    VALID_UNTIL,
    ATTACHMENT,
    VENDOR,
    CONFORMS_TO,
    ALLOW,
    DENY,
    ENDPOINT,
    DELEGATE,
    PROVENANCE,
    PRIVATE_KEY,
    SERVICE,
    CAPABILITY,
    PRIVILEGE_ALL,
    PRIVILEGE_AUTH,
    PRIVILEGE_SIGN,
    PRIVILEGE_ENCRYPT,
    PRIVILEGE_ELIDE,
    PRIVILEGE_ISSUE,
    PRIVILEGE_ACCESS,
    PRIVILEGE_DELEGATE,
    PRIVILEGE_VERIFY,
    PRIVILEGE_UPDATE,
    PRIVILEGE_TRANSFER,
    PRIVILEGE_ELECT,
    PRIVILEGE_BURN,
    PRIVILEGE_REVOKE,
    BODY,
    RESULT,
    ERROR,
    OK_VALUE,
    PROCESSING_VALUE,
    SENDER,
    SENDER_CONTINUATION,
    RECIPIENT_CONTINUATION,
    CONTENT,
    SEED_TYPE,
    PRIVATE_KEY_TYPE,
    PUBLIC_KEY_TYPE,
    MASTER_KEY_TYPE,
    ASSET,
    BITCOIN_VALUE,
    ETHEREUM_VALUE,
    TEZOS_VALUE,
    NETWORK,
    MAIN_NET_VALUE,
    TEST_NET_VALUE,
    BIP32_KEY_TYPE,
    CHAIN_CODE,
    DERIVATION_PATH_TYPE,
    PARENT_PATH,
    CHILDREN_PATH,
    PARENT_FINGERPRINT,
    PSBT_TYPE,
    OUTPUT_DESCRIPTOR_TYPE,
    OUTPUT_DESCRIPTOR,
    GRAPH,
    SOURCE_TARGET_GRAPH,
    PARENT_CHILD_GRAPH,
    DIGRAPH,
    ACYCLIC_GRAPH,
    MULTIGRAPH,
    PSEUDOGRAPH,
    GRAPH_FRAGMENT,
    DAG,
    TREE,
    FOREST,
    COMPOUND_GRAPH,
    HYPERGRAPH,
    DIHYPERGRAPH,
    NODE,
    EDGE,
    SOURCE,
    TARGET,
    PARENT,
    CHILD,
];

/// The process-wide registry of standard Known Values.
///
/// Built from [`STANDARD_KNOWN_VALUES`] on first access and shared, read-only,
/// for the rest of the process. Prefer [`known_values`] where a plain
/// reference is more convenient than the `LazyLock`.
///
/// ```
/// use known_value_registry::KNOWN_VALUES;
///
/// let is_a = KNOWN_VALUES.known_value_named("isA").unwrap();
/// assert_eq!(is_a.value(), 1);
/// ```
pub static KNOWN_VALUES: LazyLock<KnownValuesStore> = LazyLock::new(|| {
    let store = KnownValuesStore::new(STANDARD_KNOWN_VALUES.iter().cloned());
    debug!(count = store.len(), "initialized standard known values registry");
    store
});

/// Returns the standard registry, building it on first call.
pub fn known_values() -> &'static KnownValuesStore { &KNOWN_VALUES }

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_raw_constants() {
        assert_eq!(IS_A_RAW, 1);
        assert_eq!(NOTE_RAW, 4);
        assert_eq!(DATE_RAW, 16);
        assert_eq!(CHILD_RAW, 705);
        assert_eq!(IS_A.name(), "isA");
    }

    #[test]
    fn test_standard_table_is_sorted_and_distinct() {
        let values: Vec<u64> =
            STANDARD_KNOWN_VALUES.iter().map(KnownValue::value).collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!values.contains(&0));
    }

    #[test]
    fn test_registry_matches_standard_table() {
        let store = known_values();
        assert_eq!(store.len(), STANDARD_KNOWN_VALUES.len());
        for known_value in STANDARD_KNOWN_VALUES {
            assert_eq!(
                store.assigned_name(known_value),
                known_value.assigned_name()
            );
        }
        assert_eq!(store.name(DATE), "date");
        assert_eq!(
            store.known_value_named("isA").map(KnownValue::value),
            Some(1)
        );
        assert_eq!(store.name(KnownValue::new(23)), "23");
    }

    #[test]
    fn test_duplicate_standard_name() {
        let store = known_values();
        // "parent" is both 503 and 704; lookup by name reaches the later one.
        assert_eq!(store.known_value_named("parent"), Some(&PARENT));
        assert_eq!(store.name(PARENT_PATH), "parent");

        let names: HashSet<&str> = STANDARD_KNOWN_VALUES
            .iter()
            .filter_map(KnownValue::assigned_name)
            .collect();
        assert_eq!(names.len(), STANDARD_KNOWN_VALUES.len() - 1);
    }

    #[test]
    fn test_overlapping_accesses_share_one_store() {
        let outer = known_values();
        let inner: &KnownValuesStore = &KNOWN_VALUES;
        assert!(std::ptr::eq(outer, inner));
        assert!(std::ptr::eq(
            std::thread::spawn(known_values).join().unwrap(),
            outer
        ));
    }
}
