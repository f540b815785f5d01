use std::cmp;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::ptr;

pub mod cli;
pub mod parser;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

struct MengoNode<K: Ord> {
    color: Color,
    left: NodePtr<K>,
    right: NodePtr<K>,
    parent: NodePtr<K>,
    key: K,
}

struct NodePtr<K: Ord> {
    pointer: *mut MengoNode<K>,
}

impl<K: Ord> Clone for NodePtr<K> {
    fn clone(&self) -> NodePtr<K> {
        *self
    }
}

impl<K: Ord> Copy for NodePtr<K> {}

// Node identity is the allocation, never the key. Duplicated keys live in
// different nodes and must not alias each other.
impl<K: Ord> PartialEq for NodePtr<K> {
    fn eq(&self, other: &NodePtr<K>) -> bool {
        ptr::eq(self.pointer, other.pointer)
    }
}

impl<K: Ord> Eq for NodePtr<K> {}

impl<K: Ord + Debug> Debug for NodePtr<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.is_null() {
            true => f.debug_struct("NodePtr").field("pointer", &"nilson").finish(),
            false => unsafe {
                f.debug_struct("NodePtr")
                    .field("color", &(*self.pointer).color)
                    .field("key", &(*self.pointer).key)
                    .finish()
            },
        }
    }
}

impl<K: Ord> NodePtr<K> {
    fn new(k: K) -> NodePtr<K> {
        let node = MengoNode {
            color: Color::Red,
            left: NodePtr::null(),
            right: NodePtr::null(),
            parent: NodePtr::null(),
            key: k,
        };
        NodePtr {
            pointer: Box::into_raw(Box::new(node)),
        }
    }

    fn null() -> NodePtr<K> {
        NodePtr {
            pointer: ptr::null_mut(),
        }
    }

    fn is_null(&self) -> bool {
        self.pointer.is_null()
    }

    unsafe fn key<'a>(&self) -> &'a K {
        debug_assert!(!self.is_null(), "trying to read the key of a null node");
        &(*self.pointer).key
    }

    fn get_color(&self) -> Color {
        if self.is_null() {
            return Color::Black;
        }
        unsafe { (*self.pointer).color }
    }

    fn set_color(&mut self, color: Color) {
        if self.is_null() {
            return;
        }
        unsafe {
            (*self.pointer).color = color;
        }
    }

    fn set_red_color(&mut self) {
        self.set_color(Color::Red);
    }

    fn set_black_color(&mut self) {
        self.set_color(Color::Black);
    }

    fn is_red_color(&self) -> bool {
        self.get_color() == Color::Red
    }

    fn is_black_color(&self) -> bool {
        self.get_color() == Color::Black
    }

    fn parent(&self) -> NodePtr<K> {
        if self.is_null() {
            return NodePtr::null();
        }
        unsafe { (*self.pointer).parent }
    }

    fn left(&self) -> NodePtr<K> {
        if self.is_null() {
            return NodePtr::null();
        }
        unsafe { (*self.pointer).left }
    }

    fn right(&self) -> NodePtr<K> {
        if self.is_null() {
            return NodePtr::null();
        }
        unsafe { (*self.pointer).right }
    }

    fn set_parent(&mut self, parent: NodePtr<K>) {
        debug_assert!(!self.is_null(), "trying to change parent of a null node");
        unsafe {
            (*self.pointer).parent = parent;
        }
    }

    fn set_left(&mut self, left: NodePtr<K>) {
        debug_assert!(!self.is_null(), "trying to change left of a null node");
        unsafe {
            (*self.pointer).left = left;
        }
    }

    fn set_right(&mut self, right: NodePtr<K>) {
        debug_assert!(!self.is_null(), "trying to change right of a null node");
        unsafe {
            (*self.pointer).right = right;
        }
    }

    fn is_left_child(&self) -> bool {
        self.parent().left() == *self
    }

    fn is_right_child(&self) -> bool {
        self.parent().right() == *self
    }

    fn min_node(self) -> NodePtr<K> {
        let mut temp = self;
        while !temp.left().is_null() {
            temp = temp.left();
        }
        temp
    }

    fn max_node(self) -> NodePtr<K> {
        let mut temp = self;
        while !temp.right().is_null() {
            temp = temp.right();
        }
        temp
    }
}

impl<K: Ord + Clone> NodePtr<K> {
    unsafe fn deep_clone(&self) -> NodePtr<K> {
        let mut node = NodePtr::new((*self.pointer).key.clone());
        node.set_color((*self.pointer).color);
        if !self.left().is_null() {
            let mut left = self.left().deep_clone();
            node.set_left(left);
            left.set_parent(node);
        }
        if !self.right().is_null() {
            let mut right = self.right().deep_clone();
            node.set_right(right);
            right.set_parent(node);
        }
        node
    }
}

pub struct Mengo<K: Ord> {
    root: NodePtr<K>,
    len: usize,
}

impl<K: Ord> Default for Mengo<K> {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl<K: Ord + Send> Send for Mengo<K> {}

unsafe impl<K: Ord + Sync> Sync for Mengo<K> {}

// Drop all owned nodes if the tree is dropped
impl<K: Ord> Drop for Mengo<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// If the key impl Clone, we can call clone to get a structural copy.
impl<K: Ord + Clone> Clone for Mengo<K> {
    fn clone(&self) -> Mengo<K> {
        let mut new = Mengo::new();
        if !self.root.is_null() {
            new.root = unsafe { self.root.deep_clone() };
            new.len = self.len;
        }
        new
    }
}

impl<K: Ord + Debug> Debug for Mengo<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: Ord> Mengo<K> {
    /// Creates an empty `Mengo`.
    pub fn new() -> Mengo<K> {
        Mengo {
            root: NodePtr::null(),
            len: 0,
        }
    }

    /// Returns the len of `Mengo`, counting duplicated keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `Mengo` is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_null()
    }

    unsafe fn left_rotate(&mut self, node: NodePtr<K>) {
        let mut caba = node;
        let mut temp = caba.right();
        debug_assert!(!temp.is_null(), "left rotate without a right child");
        caba.set_right(temp.left());

        if !temp.left().is_null() {
            temp.left().set_parent(caba);
        }

        temp.set_parent(caba.parent());
        if caba.parent().is_null() {
            self.root = temp;
        } else if caba.is_left_child() {
            caba.parent().set_left(temp);
        } else {
            caba.parent().set_right(temp);
        }

        temp.set_left(caba);
        caba.set_parent(temp);
    }

    unsafe fn right_rotate(&mut self, node: NodePtr<K>) {
        let mut caba = node;
        let mut temp = caba.left();
        debug_assert!(!temp.is_null(), "right rotate without a left child");
        caba.set_left(temp.right());

        if !temp.right().is_null() {
            temp.right().set_parent(caba);
        }

        temp.set_parent(caba.parent());
        if caba.parent().is_null() {
            self.root = temp;
        } else if caba.is_right_child() {
            caba.parent().set_right(temp);
        } else {
            caba.parent().set_left(temp);
        }

        temp.set_right(caba);
        caba.set_parent(temp);
    }

    unsafe fn insert_fixup(&mut self, node: NodePtr<K>) {
        let mut dude = node;
        while dude != self.root && dude.parent().is_red_color() {
            if dude.parent().is_left_child() {
                let mut uncle = dude.parent().parent().right();

                // Case 1
                if uncle.is_red_color() {
                    dude.parent().set_black_color();
                    uncle.set_black_color();
                    dude.parent().parent().set_red_color();
                    dude = dude.parent().parent();
                    continue;
                }

                // Case 2
                if dude.is_right_child() {
                    dude = dude.parent();
                    self.left_rotate(dude);
                }

                // Case 3
                dude.parent().set_black_color();
                dude.parent().parent().set_red_color();
                self.right_rotate(dude.parent().parent());
            } else {
                let mut uncle = dude.parent().parent().left();

                // Case 4
                if uncle.is_red_color() {
                    uncle.set_black_color();
                    dude.parent().set_black_color();
                    dude.parent().parent().set_red_color();
                    dude = dude.parent().parent();
                    continue;
                }

                // Case 5
                if dude.is_left_child() {
                    dude = dude.parent();
                    self.right_rotate(dude);
                }

                // Case 6
                dude.parent().set_black_color();
                dude.parent().parent().set_red_color();
                self.left_rotate(dude.parent().parent());
            }
        }
        self.root.set_black_color();
    }

    pub fn insert(&mut self, k: K) {
        self.len += 1;
        let mut node = NodePtr::new(k);

        if self.root.is_null() {
            // The root is always black
            node.set_black_color();
            self.root = node;
            return;
        }

        let mut y = NodePtr::null();
        let mut x = self.root;

        unsafe {
            while !x.is_null() {
                y = x;
                x = match node.key().cmp(x.key()) {
                    Ordering::Less => x.left(),
                    // Equal keys go down the right subtree
                    _ => x.right(),
                };
            }

            node.set_parent(y);
            match node.key().cmp(y.key()) {
                Ordering::Less => y.set_left(node),
                _ => y.set_right(node),
            };

            // A red child right under the black root cannot break any invariant
            if y.parent().is_null() {
                debug_assert!(y.is_black_color(), "the root must be black");
                return;
            }

            self.insert_fixup(node);
        }
    }

    fn find_node(&self, k: &K) -> NodePtr<K> {
        let mut temp = self.root;
        unsafe {
            while !temp.is_null() {
                temp = match k.cmp(temp.key()) {
                    Ordering::Less => temp.left(),
                    Ordering::Greater => temp.right(),
                    Ordering::Equal => return temp,
                };
            }
        }
        NodePtr::null()
    }

    pub fn contains(&self, k: &K) -> bool {
        !self.find_node(k).is_null()
    }

    pub fn min(&self) -> Option<&K> {
        if self.root.is_null() {
            return None;
        }
        let node = self.root.min_node();
        unsafe { Some(node.key()) }
    }

    pub fn max(&self) -> Option<&K> {
        if self.root.is_null() {
            return None;
        }
        let node = self.root.max_node();
        unsafe { Some(node.key()) }
    }

    /// Finds the smallest key strictly after the node holding `k`, walking up
    /// the parent chain when the node has no right subtree.
    pub fn successor(&self, k: &K) -> Option<&K> {
        let node = self.find_node(k);
        if node.is_null() {
            return None;
        }

        let succ = self.successor_helper(node);
        if succ.is_null() {
            return None;
        }

        unsafe { Some(succ.key()) }
    }

    fn successor_helper(&self, node: NodePtr<K>) -> NodePtr<K> {
        let mut x = node;
        if !x.right().is_null() {
            return x.right().min_node();
        }

        let mut y = x.parent();
        while !y.is_null() && x.is_right_child() {
            x = y;
            y = x.parent();
        }
        y
    }

    pub fn predecessor(&self, k: &K) -> Option<&K> {
        let node = self.find_node(k);
        if node.is_null() {
            return None;
        }

        let pred = self.predecessor_helper(node);
        if pred.is_null() {
            return None;
        }

        unsafe { Some(pred.key()) }
    }

    fn predecessor_helper(&self, node: NodePtr<K>) -> NodePtr<K> {
        let mut x = node;
        if !x.left().is_null() {
            return x.left().max_node();
        }

        let mut y = x.parent();
        while !y.is_null() && x.is_left_child() {
            x = y;
            y = x.parent();
        }
        y
    }

    /// Height in node levels, an empty tree has height zero.
    pub fn height(&self) -> usize {
        self.height_helper(self.root)
    }

    fn height_helper(&self, node: NodePtr<K>) -> usize {
        if node.is_null() {
            return 0;
        }
        cmp::max(
            self.height_helper(node.left()) + 1,
            self.height_helper(node.right()) + 1,
        )
    }

    /// In order iterator over the keys, ascending and duplicate respecting.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut stack = Vec::new();
        let mut node = self.root;
        while !node.is_null() {
            stack.push(node);
            node = node.left();
        }
        Iter {
            stack,
            _tree: PhantomData,
        }
    }

    fn clear_recurse(&mut self, current: NodePtr<K>) {
        if !current.is_null() {
            unsafe {
                self.clear_recurse(current.left());
                self.clear_recurse(current.right());
                let _ = Box::from_raw(current.pointer);
            }
        }
    }

    pub fn clear(&mut self) {
        let root = self.root;
        self.root = NodePtr::null();
        self.clear_recurse(root);
        self.len = 0;
    }
}

pub struct Iter<'a, K: Ord> {
    stack: Vec<NodePtr<K>>,
    _tree: PhantomData<&'a Mengo<K>>,
}

impl<'a, K: Ord> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let mut next = node.right();
        while !next.is_null() {
            self.stack.push(next);
            next = next.left();
        }
        unsafe { Some(node.key()) }
    }
}
