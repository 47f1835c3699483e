use radix_trie::{Error, Trie, TrieConfig};

const DIR: &[u8] = b"dir";
const FILE: &[u8] = b"file";

fn file_tree() -> Trie {
    let mut t = Trie::new();
    t.insert(b"/etc/nginx/nginx.conf", FILE.to_vec());
    t.insert(b"/etc/nginx/nginx.conf.d", DIR.to_vec());
    t.insert(b"/etc/sshd", DIR.to_vec());
    t.insert(b"/etc/sshd/sshd.conf", FILE.to_vec());
    t.insert(b"/var/log", DIR.to_vec());
    t.insert(b"/var/log/nginx", DIR.to_vec());
    t.insert(b"/var/log/nginx/access.log", FILE.to_vec());
    t
}

#[test]
fn sorted_traversal_lists_files() {
    let mut t = file_tree();
    t.set_sorted(true);

    let mut files = vec![];
    t.traverse(|visit| -> Result<bool, Error> {
        if visit.is_leaf() && visit.value.map(Vec::as_slice) == Some(FILE) {
            files.push(String::from_utf8_lossy(visit.path).into_owned());
        }
        Ok(true)
    })
    .unwrap();

    assert_eq!(
        files,
        vec![
            "/etc/nginx/nginx.conf",
            "/etc/sshd/sshd.conf",
            "/var/log/nginx/access.log",
        ]
    );
}

#[test]
fn traversal_propagates_callback_error() {
    let t = file_tree();
    let result = t.traverse(|visit| {
        if visit.path.starts_with(b"/var") {
            return Err(Error::NotFound {
                key: visit.path.to_vec(),
            });
        }
        Ok(true)
    });
    match result {
        Err(Error::NotFound { key }) => assert!(key.starts_with(b"/var")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn prefix_then_delete() {
    let mut t = Trie::with_config(TrieConfig::new().sorted(true));
    t.insert(b"home", b"home-value".to_vec());
    t.insert(b"homework", b"homework-value".to_vec());

    assert_eq!(t.keys(b"hom"), vec![b"home".to_vec(), b"homework".to_vec()]);

    t.remove(b"home");
    assert!(t.contains(b"homework"));
    assert!(!t.contains(b"home"));
    assert_eq!(t.keys(b"hom"), vec![b"homework".to_vec()]);
    assert_eq!(t.get(b"homework").unwrap(), b"homework-value");
}

#[test]
fn delete_keeps_merged_paths_reachable() {
    let mut t = file_tree();
    t.remove(b"/etc/nginx/nginx.conf");
    t.remove(b"/var/log/nginx");

    assert_eq!(t.get(b"/etc/nginx/nginx.conf.d").unwrap(), DIR);
    assert_eq!(t.get(b"/var/log/nginx/access.log").unwrap(), FILE);
    assert_eq!(t.get(b"/var/log").unwrap(), DIR);
    assert_eq!(t.len(), 5);

    // The merged edges leave one node per remaining branch point.
    t.set_sorted(true);
    let mut depth_of = vec![];
    t.traverse(|visit| -> Result<bool, Error> {
        if visit.is_leaf() {
            depth_of.push((visit.path.to_vec(), visit.depth));
        }
        Ok(true)
    })
    .unwrap();
    assert!(depth_of.contains(&(b"/var/log/nginx/access.log".to_vec(), 3)));
}

#[test]
fn get_and_set_absent_key_report_not_found() {
    let mut t = file_tree();
    assert_eq!(
        t.get(b"/etc/nginx"),
        Err(Error::NotFound {
            key: b"/etc/nginx".to_vec()
        })
    );
    assert!(t.set(b"/etc/ssh", FILE.to_vec()).is_err());
    assert!(!t.contains(b"/etc/ssh"));
}
